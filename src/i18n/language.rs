//! Language type: Flexible, validated locale representation.
//!
//! This module provides the `Language` type, a lightweight wrapper around a
//! registry-validated locale code.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated locale.
///
/// Only supported, enabled locales can be constructed, so every `Language`
/// value is guaranteed to have a message catalog and registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    /// English (the designated fallback locale).
    pub const ENGLISH: Language = Language { code: "en" };

    /// Spanish.
    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a locale code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the designated fallback locale.
    ///
    /// This is the single locale consulted when a message key is missing in
    /// the active locale, and the floor of initial-locale resolution.
    pub fn fallback() -> Language {
        let config = LanguageRegistry::get().fallback();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This should never
    /// happen if the Language was constructed properly (via `from_code` or
    /// the constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the designated fallback locale.
    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }
}
