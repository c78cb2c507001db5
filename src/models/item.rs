use serde::{Deserialize, Serialize};
use url::Url;

use crate::directory::DirectoryError;

/// A single link entry in the directory.
///
/// Items are immutable once constructed. The `href` decides presentation:
/// an absolute URL (one with a scheme) is rendered with a new-context
/// target, while a root-relative path navigates within the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Validate and construct an item.
    ///
    /// Fails with [`DirectoryError::InvalidItem`] if the title is empty or
    /// the href is neither a parsable absolute URL nor a root-relative
    /// path.
    pub fn new(
        title: impl Into<String>,
        href: impl Into<String>,
        description: Option<&str>,
    ) -> Result<Self, DirectoryError> {
        let title = title.into();
        let href = href.into();

        if title.trim().is_empty() {
            return Err(DirectoryError::InvalidItem {
                title,
                reason: "title must not be empty".to_string(),
            });
        }

        if href_has_scheme(&href) {
            if Url::parse(&href).is_err() {
                return Err(DirectoryError::InvalidItem {
                    title,
                    reason: format!("unparsable href '{}'", href),
                });
            }
        } else if !href.starts_with('/') {
            return Err(DirectoryError::InvalidItem {
                title,
                reason: format!("href '{}' is neither an absolute URL nor a root-relative path", href),
            });
        }

        Ok(Self {
            title,
            href,
            description: description.map(str::to_string),
        })
    }

    /// Whether this item points outside the site.
    ///
    /// External items carry a URL scheme and are rendered with
    /// `target="_blank"`; everything else is an internal path.
    pub fn is_external(&self) -> bool {
        href_has_scheme(&self.href)
    }
}

/// True if `href` begins with a URL scheme (RFC 3986: an ASCII letter
/// followed by letters, digits, `+`, `-`, or `.`, terminated by `:`).
fn href_has_scheme(href: &str) -> bool {
    let mut chars = href.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {}
            _ => return false,
        }
    }
    false
}
