//! The route table: the canonical list of top-level navigable paths.
//!
//! Both the navigation header and the sitemap read from this one list, so
//! they can never disagree about what is navigable. The list is defined
//! independently of the directory and checked against it once at startup.

use serde::{Deserialize, Serialize};

use crate::directory::{Directory, DirectoryError};

/// Top-level routes in display order. `/` is the landing page and has no
/// section of its own.
const STANDARD_ROUTES: &[&str] = &[
    "/",
    "/official-resources",
    "/community",
    "/integrations",
    "/applications",
    "/education",
    "/guides",
];

/// A label/link pair for the navigation header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Ordered list of top-level routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<String>,
}

impl RouteTable {
    /// The shipped route set.
    pub fn standard() -> Self {
        Self::new(STANDARD_ROUTES.iter().copied())
    }

    pub fn new(routes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    /// The routes, in the order they appear in navigation and the sitemap.
    pub fn static_routes(&self) -> &[String] {
        &self.routes
    }

    /// Check that every non-root route has a registered section.
    ///
    /// Run once at startup (and by `linkhub check`), never per request.
    pub fn validate(&self, directory: &Directory) -> Result<(), DirectoryError> {
        for route in &self.routes {
            let slug = route.trim_start_matches('/');
            if slug.is_empty() {
                continue; // landing page
            }
            if directory.resolve(slug).is_none() {
                return Err(DirectoryError::MissingSection {
                    slug: slug.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Header links: `/` labelled "Home", every other route labelled with
    /// its section title. Routes that do not resolve are skipped; a
    /// validated table never produces any.
    pub fn nav_links(&self, directory: &Directory) -> Vec<NavLink> {
        self.routes
            .iter()
            .filter_map(|route| {
                let slug = route.trim_start_matches('/');
                if slug.is_empty() {
                    return Some(NavLink {
                        label: "Home".to_string(),
                        href: "/".to_string(),
                    });
                }
                directory.resolve(slug).map(|section| NavLink {
                    label: section.title.clone(),
                    href: route.clone(),
                })
            })
            .collect()
    }
}
