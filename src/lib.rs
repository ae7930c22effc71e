//! Core library for a static personal-portfolio site.
//!
//! Two pieces carry the real design weight:
//!
//! - the project content model and its image-resolution cascade
//!   ([`projects`], [`images`]): every project resolves to exactly one
//!   visual — a live-demo screenshot URL, a repository social card, or a
//!   deterministic CSS gradient;
//! - locale resolution and message lookup ([`i18n`], [`prefs`]): the active
//!   locale is decided once at startup from the stored preference, the
//!   platform language, and a hard-coded fallback, and missing message keys
//!   degrade through a single fallback locale instead of failing.
//!
//! The core performs no network I/O; external image services are URL
//! templates, and fetching them is the rendering layer's concern.

pub mod config;
pub mod i18n;
pub mod images;
pub mod prefs;
pub mod projects;
