//! Catalog congruence validation.
//!
//! Locale trees should be structurally congruent (same key paths, same node
//! kinds) so that every message a visitor can see in the fallback locale is
//! also translated. The resolver tolerates divergence at lookup time; this
//! validator surfaces it at test time so catalogs cannot silently drift.

use crate::i18n::catalog::MessageCatalog;

/// Validation report containing errors and warnings about one locale's
/// congruence with the reference locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems: same key path, incompatible node kind
    pub errors: Vec<String>,

    /// Drift the fallback mechanism papers over: missing or extra key paths
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale-tree congruence.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate that `other` is congruent with `reference`.
    ///
    /// Checks:
    /// - every leaf key path of the reference exists in the other locale
    ///   (missing → warning: the fallback covers it, but the visitor sees
    ///   untranslated text);
    /// - the other locale has no leaf paths the reference lacks
    ///   (extra → warning: unreachable copy, likely drift);
    /// - shared paths resolve to the same node kind (mismatch → error: the
    ///   presentation layer expects a stable shape).
    pub fn validate(reference: &MessageCatalog, other: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        for path in reference.key_paths() {
            match other.resolve(&path) {
                None => {
                    report.warnings.push(format!(
                        "Key '{}' missing in locale '{}' (present in '{}')",
                        path,
                        other.language().code(),
                        reference.language().code()
                    ));
                }
                Some(node) => {
                    // Reference leaf paths always resolve in the reference
                    let reference_node = reference
                        .resolve(&path)
                        .expect("Enumerated key path should resolve in its own catalog");
                    if node.kind() != reference_node.kind() {
                        report.errors.push(format!(
                            "Key '{}' is {} in locale '{}' but {} in locale '{}'",
                            path,
                            node.kind(),
                            other.language().code(),
                            reference_node.kind(),
                            reference.language().code()
                        ));
                    }
                }
            }
        }

        for path in other.key_paths() {
            if reference.resolve(&path).is_none() {
                report.warnings.push(format!(
                    "Key '{}' in locale '{}' has no counterpart in locale '{}'",
                    path,
                    other.language().code(),
                    reference.language().code()
                ));
            }
        }

        report
    }
}
