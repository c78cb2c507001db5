//! Domain models for LinkHub.
//!
//! # Core Concepts
//!
//! - [`Item`]: A single link entry (title, destination, optional
//!   description). An item whose `href` carries a URL scheme is *external*
//!   and opens in a new browsing context; a root-relative `href` is
//!   *internal*.
//! - [`Group`]: An optionally labeled, ordered cluster of items within a
//!   section. Untitled groups render as "ungrouped".
//! - [`Section`]: A named, described collection of groups, displayed as one
//!   directory page and addressed by a URL-safe slug.
//!
//! All three are immutable once constructed: constructors validate eagerly
//! and nothing is mutated after the directory is built.

mod group;
mod item;
mod section;

pub use group::*;
pub use item::*;
pub use section::*;
