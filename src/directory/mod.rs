//! The directory registry and section resolver.
//!
//! A [`Directory`] is assembled once at startup through
//! [`DirectoryBuilder`], which enforces slug uniqueness as sections are
//! registered, then finalized into an immutable structure with an O(1)
//! slug index. After that point there are no writers: the directory is
//! shared behind an `Arc` and every operation is a pure read, so
//! concurrent page renders need no locking.

pub mod content;

use std::collections::HashMap;

use thiserror::Error;

use crate::models::Section;

/// Construction-time and startup-time failures.
///
/// Every variant is fatal to startup: the directory must be internally
/// consistent before serving traffic. The one runtime-recoverable
/// condition, a slug resolution miss, is `Option::None` on
/// [`Directory::resolve`] rather than an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("invalid item '{title}': {reason}")]
    InvalidItem { title: String, reason: String },

    #[error("invalid slug '{slug}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug { slug: String },

    #[error("duplicate item title '{title}' in group '{group}'")]
    DuplicateItemTitle { group: String, title: String },

    #[error("group '{group}' has no items")]
    EmptyGroup { group: String },

    #[error("section '{slug}' has no groups")]
    EmptySection { slug: String },

    #[error("duplicate section slug '{slug}'")]
    DuplicateSlug { slug: String },

    #[error("route '/{slug}' has no registered section")]
    MissingSection { slug: String },
}

/// Accumulates sections in registration order, rejecting duplicate slugs.
#[derive(Debug, Default)]
pub struct DirectoryBuilder {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl DirectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section. Fails with [`DirectoryError::DuplicateSlug`] if
    /// a section with the same slug was already registered.
    pub fn register(&mut self, section: Section) -> Result<(), DirectoryError> {
        if self.index.contains_key(&section.slug) {
            return Err(DirectoryError::DuplicateSlug {
                slug: section.slug.clone(),
            });
        }
        self.index.insert(section.slug.clone(), self.sections.len());
        self.sections.push(section);
        Ok(())
    }

    /// Finalize into an immutable directory with its slug index.
    pub fn build(self) -> Directory {
        Directory {
            sections: self.sections,
            index: self.index,
        }
    }
}

/// The complete, immutable collection of all sections.
///
/// Built once before the server binds; never mutated afterwards.
#[derive(Debug)]
pub struct Directory {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl Directory {
    /// All sections in registration order. Order is significant: it
    /// dictates on-page display order.
    pub fn all(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by slug.
    ///
    /// A miss is an expected, recoverable condition: the page renderer
    /// maps `None` to an empty page, the JSON API to a 404.
    pub fn resolve(&self, slug: &str) -> Option<&Section> {
        self.index.get(slug).map(|&i| &self.sections[i])
    }

    /// Like [`resolve`](Self::resolve), falling back to the given section
    /// on a miss.
    pub fn resolve_or<'a>(&'a self, slug: &str, fallback: &'a Section) -> &'a Section {
        self.resolve(slug).unwrap_or(fallback)
    }
}
