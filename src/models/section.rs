use serde::{Deserialize, Serialize};

use crate::directory::DirectoryError;
use crate::models::Group;

/// A named, described collection of groups, displayed as one directory
/// page and addressed by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// URL-safe identifier: lookup key and URL path segment.
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub groups: Vec<Group>,
}

impl Section {
    /// Validate and construct a section.
    ///
    /// Fails with [`DirectoryError::InvalidSlug`] unless the slug is
    /// non-empty lowercase alphanumeric with hyphens, and with
    /// [`DirectoryError::EmptySection`] on an empty group list.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        groups: Vec<Group>,
    ) -> Result<Self, DirectoryError> {
        let slug = slug.into();

        if !is_url_safe(&slug) {
            return Err(DirectoryError::InvalidSlug { slug });
        }
        if groups.is_empty() {
            return Err(DirectoryError::EmptySection { slug });
        }

        Ok(Self {
            slug,
            title: title.into(),
            summary: summary.into(),
            groups,
        })
    }
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
