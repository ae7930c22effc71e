//! Locale resolution and message lookup with single-level fallback.
//!
//! The resolver decides the active locale exactly once per session
//! (stored preference → platform language primary subtag → fallback locale)
//! and answers every message lookup afterwards. A missing key never halts
//! rendering: lookups are total and yield a marker the caller turns into a
//! display decision.

use crate::i18n::catalog::{CatalogSet, MessageNode};
use crate::i18n::metrics::LookupMetrics;
use crate::i18n::Language;
use crate::prefs::{PreferenceStore, PrefsError, LOCALE_KEY};
use tracing::{debug, info, warn};

/// Resolve the locale to activate at session start.
///
/// Priority:
/// 1. the stored preference, if it names a supported, enabled locale;
/// 2. the primary subtag of the platform language (e.g. `es-AR` → `es`,
///    `es_AR.UTF-8` → `es`), if supported;
/// 3. the designated fallback locale.
///
/// Total: always yields some supported locale.
pub fn resolve_initial_locale(
    stored: Option<&str>,
    platform_language: Option<&str>,
) -> Language {
    if let Some(code) = stored {
        match Language::from_code(code) {
            Ok(language) => return language,
            Err(_) => debug!(code, "Stored locale preference is unsupported, ignoring"),
        }
    }

    if let Some(tag) = platform_language {
        let primary = primary_subtag(tag);
        if let Ok(language) = Language::from_code(&primary) {
            return language;
        }
        debug!(tag, "Platform language is unsupported, using fallback");
    }

    Language::fallback()
}

/// Extract the primary subtag of a platform language tag.
///
/// Handles both BCP 47 tags (`es-AR`) and POSIX locale strings
/// (`es_AR.UTF-8`).
fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_', '.'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// The outcome of a message lookup.
///
/// Intermediate tree nodes are not displayable and resolve like missing
/// keys. `Missing` carries the requested key path so the caller can render
/// it literally (the common display-layer policy) or render nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    Text(&'a str),
    List(&'a [String]),
    Missing(String),
}

impl Resolved<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing(_))
    }
}

/// Locale resolver lifecycle.
///
/// `Uninitialized → Resolving → Active` happens exactly once, synchronously,
/// on the first preference read. There is no error state: resolution always
/// terminates in `Active` because of the unconditional fallback floor.
/// `Active(L1) → Active(L2)` only through an explicit [`LocaleResolver::set_locale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Uninitialized,
    Resolving,
    Active(Language),
}

/// Session-scoped locale resolver.
///
/// Owns the preference store and borrows the (immutable) catalog set; every
/// UI surface needing text consults it. Threaded explicitly through the
/// presentation layer rather than held as an ambient global, so it stays
/// testable in isolation.
pub struct LocaleResolver<'c, S: PreferenceStore> {
    store: S,
    catalogs: &'c CatalogSet,
    state: ResolverState,
}

impl<'c, S: PreferenceStore> LocaleResolver<'c, S> {
    /// Create an uninitialized resolver. No I/O happens here.
    pub fn new(store: S, catalogs: &'c CatalogSet) -> Self {
        Self {
            store,
            catalogs,
            state: ResolverState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// The active locale, if initialization has happened.
    pub fn active(&self) -> Option<Language> {
        match self.state {
            ResolverState::Active(language) => Some(language),
            _ => None,
        }
    }

    /// Resolve and activate the session locale.
    ///
    /// Reads the stored preference exactly once. Idempotent: a second call
    /// returns the already-active locale without touching the store.
    pub fn initialize(&mut self, platform_language: Option<&str>) -> Language {
        if let ResolverState::Active(language) = self.state {
            return language;
        }

        self.state = ResolverState::Resolving;
        let stored = self.store.get(LOCALE_KEY);
        let language = resolve_initial_locale(stored.as_deref(), platform_language);
        self.state = ResolverState::Active(language);

        info!(locale = language.code(), "Locale resolved");
        language
    }

    /// Explicitly change the active locale, writing the preference through
    /// to the store.
    ///
    /// The in-memory active locale changes even when the write fails; the
    /// failure is logged and returned so the caller may surface it, and the
    /// stored slot keeps its prior value.
    pub fn set_locale(&mut self, language: Language) -> Result<(), PrefsError> {
        self.state = ResolverState::Active(language);

        match self.store.set(LOCALE_KEY, language.code()) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(
                    locale = language.code(),
                    error = %err,
                    "Failed to persist locale preference"
                );
                Err(err)
            }
        }
    }

    /// Look up a message by dot-separated key path in the active locale,
    /// retrying the full path against the single fallback locale's tree when
    /// the active tree misses.
    ///
    /// Never panics and never returns an error; a key absent from both trees
    /// yields [`Resolved::Missing`]. Before initialization the fallback
    /// locale answers lookups (the unconditional floor).
    pub fn lookup(&self, key_path: &str) -> Resolved<'c> {
        let metrics = LookupMetrics::global();
        metrics.record_lookup();

        let active = self
            .active()
            .unwrap_or_else(|| self.catalogs.fallback_language());

        if let Some(resolved) = self.leaf(active, key_path) {
            return resolved;
        }

        let fallback = self.catalogs.fallback_language();
        if fallback != active {
            metrics.record_fallback_hit();
            debug!(locale = active.code(), key_path, "Falling back for message key");
            if let Some(resolved) = self.leaf(fallback, key_path) {
                return resolved;
            }
        }

        metrics.record_missing_key();
        warn!(key_path, "Message key missing in active and fallback locales");
        Resolved::Missing(key_path.to_string())
    }

    /// Convenience for the overwhelmingly common case: the text at
    /// `key_path`, or the literal key path when the message is missing or
    /// not a plain string.
    pub fn text<'s>(&'s self, key_path: &'s str) -> &'s str
    where
        'c: 's,
    {
        match self.lookup(key_path) {
            Resolved::Text(text) => text,
            _ => key_path,
        }
    }

    fn leaf(&self, language: Language, key_path: &str) -> Option<Resolved<'c>> {
        match self.catalogs.catalog(language)?.resolve(key_path) {
            Some(MessageNode::Text(text)) => Some(Resolved::Text(text)),
            Some(MessageNode::List(items)) => Some(Resolved::List(items)),
            // Intermediate trees are not displayable
            Some(MessageNode::Tree(_)) | None => None,
        }
    }
}
