//! Sitemap generation over the static route set.

use chrono::NaiveDate;

use crate::routes::RouteTable;

/// Render the standard sitemap `<urlset>` document: one `<url>` per static
/// route, with `<loc>` under `base_url` and `<lastmod>` set to the content
/// revision date.
pub fn render(base_url: &str, routes: &RouteTable, last_modified: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = last_modified.format("%Y-%m-%d");

    let mut xml = String::from(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    ));
    for route in routes.static_routes() {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{base}{route}</loc>\n"));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}
