//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for managing
//! the portfolio's display locales. All locale-related logic, message trees,
//! and lookup infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `language`: Type-safe Language wrapper validated against the registry
//! - `catalog`: One nested message tree per locale, with dot-path resolution
//! - `resolver`: Initial-locale resolution and message lookup with fallback
//! - `validator`: Catalog congruence checking (test-time drift detection)
//! - `metrics`: Lookup observability
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_core::i18n::{CatalogSet, Language, LocaleResolver};
//! use portfolio_core::prefs::MemoryPreferenceStore;
//!
//! let mut resolver = LocaleResolver::new(MemoryPreferenceStore::new(), CatalogSet::get());
//! resolver.initialize(Some("es-AR"));
//! let heading = resolver.text("projects.title");
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod resolver;
mod validator;

pub use catalog::{CatalogSet, MessageCatalog, MessageNode};
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{resolve_initial_locale, LocaleResolver, Resolved, ResolverState};
pub use validator::{CatalogValidator, ValidationReport};
