use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::directory::DirectoryError;
use crate::models::Item;

/// An optionally labeled, ordered cluster of items within a section.
///
/// Item order is author order and dictates on-page display order; it is
/// never re-sorted. Item titles are unique within a group because the
/// title is the stable key used when iterating for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<Item>,
}

impl Group {
    /// Build a labeled group from a non-empty item list.
    pub fn titled(title: impl Into<String>, items: Vec<Item>) -> Result<Self, DirectoryError> {
        Self::build(Some(title.into()), items)
    }

    /// Build an unlabeled group; rendered as "ungrouped".
    pub fn untitled(items: Vec<Item>) -> Result<Self, DirectoryError> {
        Self::build(None, items)
    }

    fn build(title: Option<String>, items: Vec<Item>) -> Result<Self, DirectoryError> {
        let group = title.as_deref().unwrap_or(UNGROUPED).to_string();

        if items.is_empty() {
            return Err(DirectoryError::EmptyGroup { group });
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.title.as_str()) {
                return Err(DirectoryError::DuplicateItemTitle {
                    group,
                    title: item.title.clone(),
                });
            }
        }

        Ok(Self { title, items })
    }

    /// The label shown for this group; "ungrouped" when none was given.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNGROUPED)
    }
}

const UNGROUPED: &str = "ungrouped";
