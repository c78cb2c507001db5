//! Server-side HTML rendering for the directory pages.
//!
//! Pages are a pure function of the immutable directory plus the
//! navigation links. A slug that does not resolve renders the page shell
//! with an empty main region, never an error page.

use crate::directory::Directory;
use crate::models::{Group, Section};
use crate::routes::NavLink;

const SITE_NAME: &str = "LinkHub";

/// The landing page: every section with its summary, linked by slug.
pub fn index_page(directory: &Directory, nav: &[NavLink]) -> String {
    let mut main = String::from("<ul class=\"sections\">\n");
    for section in directory.all() {
        main.push_str(&format!(
            "<li><a href=\"/{slug}\">{title}</a><p>{summary}</p></li>\n",
            slug = escape(&section.slug),
            title = escape(&section.title),
            summary = escape(&section.summary),
        ));
    }
    main.push_str("</ul>\n");
    page_shell(SITE_NAME, nav, &main)
}

/// One listing page. An unresolvable slug renders the shell with an empty
/// main region.
pub fn section_page(directory: &Directory, nav: &[NavLink], slug: &str) -> String {
    match directory.resolve(slug) {
        Some(section) => page_shell(&section.title, nav, &render_section(section)),
        None => page_shell(SITE_NAME, nav, ""),
    }
}

fn render_section(section: &Section) -> String {
    let mut html = format!(
        "<h1>{}</h1>\n<p class=\"summary\">{}</p>\n",
        escape(&section.title),
        escape(&section.summary),
    );
    for group in &section.groups {
        html.push_str(&render_group(group));
    }
    html
}

fn render_group(group: &Group) -> String {
    let mut html = String::from("<section class=\"group\">\n");
    if let Some(title) = &group.title {
        html.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    }
    html.push_str("<ul>\n");
    for item in &group.items {
        let target = if item.is_external() {
            " target=\"_blank\" rel=\"noopener\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"{href}\"{target}>{title}</a>",
            href = escape(&item.href),
            title = escape(&item.title),
        ));
        if let Some(description) = &item.description {
            html.push_str(&format!(" <span>{}</span>", escape(description)));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</section>\n");
    html
}

fn page_shell(title: &str, nav: &[NavLink], main: &str) -> String {
    let mut nav_html = String::from("<nav>\n");
    for link in nav {
        nav_html.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            escape(&link.href),
            escape(&link.label),
        ));
    }
    nav_html.push_str("</nav>\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n{nav_html}<main>\n{main}</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
