//! Catalog check binary - validates the project registry and locale-catalog
//! congruence without rendering anything.
//!
//! Usage:
//!   cargo run --bin check-catalogs
//!
//! Exits non-zero when the registry violates its invariants or a locale's
//! node kinds drifted from the fallback locale's shape. Missing/extra keys
//! are reported as warnings but do not fail the check (the fallback
//! mechanism covers them).

use anyhow::{bail, Result};
use portfolio_core::i18n::{CatalogSet, CatalogValidator};
use portfolio_core::projects::ProjectRegistry;
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_core=info".parse()?)
                .add_directive("check_catalogs=info".parse()?),
        )
        .init();

    info!("Checking project registry");
    ProjectRegistry::get().validate()?;
    info!(
        projects = ProjectRegistry::get().all().len(),
        "Registry invariants hold"
    );

    let set = CatalogSet::get();
    let reference = set
        .catalog(set.fallback_language())
        .expect("Fallback catalog is always loaded");

    let mut drifted = false;
    for other in set.catalogs() {
        if other.language() == reference.language() {
            continue;
        }

        info!(locale = other.language().code(), "Checking catalog congruence");
        let report = CatalogValidator::validate(reference, other);

        for warning in &report.warnings {
            warn!(locale = other.language().code(), "{}", warning);
        }
        for error in &report.errors {
            eprintln!("error [{}]: {}", other.language().code(), error);
            drifted = true;
        }

        if report.is_clean() {
            info!(locale = other.language().code(), "Catalog is congruent");
        }
    }

    if drifted {
        bail!("Locale catalogs drifted from the fallback locale's shape");
    }

    info!("All catalogs check out");
    Ok(())
}
