//! LinkHub: a curated link directory served over HTTP.
//!
//! The core is an immutable, in-memory taxonomy of sections, groups, and
//! link items ([`directory::Directory`]), built once at startup from the
//! version-controlled content definition and shared read-only with every
//! request. Everything else — the JSON API, the rendered HTML pages, the
//! navigation header, the sitemap — is a view over that one structure.

pub mod api;
pub mod directory;
pub mod models;
pub mod render;
pub mod routes;
pub mod sitemap;
