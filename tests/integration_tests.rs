//! Integration tests for the portfolio core.
//!
//! These tests verify the interaction between multiple modules: the full
//! image-resolution cascade over the seeded registry, and the locale
//! round-trip through a real file-backed preference store (set a locale,
//! "reload", observe the persisted preference win the initial resolution).

use portfolio_core::i18n::{
    resolve_initial_locale, CatalogSet, CatalogValidator, Language, LocaleResolver, Resolved,
    ResolverState,
};
use portfolio_core::images::{gradient_for_id, ImageProviders, ImageSource, GRADIENT_PALETTE};
use portfolio_core::prefs::{FilePreferenceStore, PreferenceStore, LOCALE_KEY};
use portfolio_core::projects::ProjectRegistry;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Open a file-backed store inside a fresh temp dir.
fn temp_store(dir: &TempDir) -> FilePreferenceStore {
    FilePreferenceStore::open(dir.path().join("preferences.json"))
        .expect("Store should open on a fresh path")
}

// ==================== Image Cascade Tests ====================

#[test]
fn test_every_registry_project_resolves_to_a_visual() {
    let providers = ImageProviders::default();

    for project in ProjectRegistry::get().all() {
        // No error outcome exists; every project gets some visual.
        let image = providers.resolve_best_image(project);

        match image {
            ImageSource::RemoteScreenshot { url } | ImageSource::SocialCard { url } => {
                assert!(url.starts_with("https://"), "Project {}: {}", project.id, url);
            }
            ImageSource::Gradient { css } => {
                assert_eq!(css, gradient_for_id(project.id));
            }
        }
    }
}

#[test]
fn test_projects_with_demo_get_screenshots() {
    let providers = ImageProviders::default();

    for project in ProjectRegistry::get().all() {
        if !project.has_demo() {
            continue;
        }
        let image = providers.resolve_best_image(project);
        let encoded_demo = urlencoding::encode(project.demo.unwrap()).into_owned();

        match image {
            ImageSource::RemoteScreenshot { url } => assert!(url.contains(&encoded_demo)),
            other => panic!("Project {} should get a screenshot, got {:?}", project.id, other),
        }
    }
}

#[test]
fn test_demoless_project_gets_social_card() {
    let providers = ImageProviders::default();
    let registry = ProjectRegistry::get();

    // UI Storybook has no demo but a parsable GitHub URL
    let project = registry.get_by_id(4).expect("Project 4 should exist");
    assert!(!project.has_demo());

    match providers.resolve_best_image(project) {
        ImageSource::SocialCard { url } => {
            assert_eq!(
                url,
                "https://opengraph.githubassets.com/1/rodrigofrende/UI-Storybook"
            );
        }
        other => panic!("Expected social card, got {:?}", other),
    }
}

#[test]
fn test_cascade_is_stable_across_repeated_calls() {
    let providers = ImageProviders::default();

    for project in ProjectRegistry::get().all() {
        let first = providers.resolve_best_image(project);
        let second = providers.resolve_best_image(project);
        assert_eq!(first, second, "Project {} resolution drifted", project.id);
    }
}

#[test]
fn test_gradient_wraparound_boundaries() {
    let len = GRADIENT_PALETTE.len() as i64;

    assert_eq!(gradient_for_id(0), GRADIENT_PALETTE[0]);
    assert_eq!(gradient_for_id(len), GRADIENT_PALETTE[0]);
    assert_eq!(gradient_for_id(len + 1), GRADIENT_PALETTE[1]);
}

// ==================== Locale Round-Trip Tests ====================

#[test]
fn test_set_locale_then_reload_resolves_to_new_locale() {
    let dir = TempDir::new().unwrap();

    // Session 1: default resolution, then an explicit switch to Spanish
    {
        let store = temp_store(&dir);
        let mut resolver = LocaleResolver::new(store, CatalogSet::get());
        assert_eq!(resolver.initialize(None), Language::ENGLISH);

        resolver
            .set_locale(Language::SPANISH)
            .expect("Write-through should succeed");
    }

    // Session 2 (simulated reload): the persisted preference wins
    {
        let store = temp_store(&dir);
        assert_eq!(store.get(LOCALE_KEY).as_deref(), Some("es"));

        let mut resolver = LocaleResolver::new(store, CatalogSet::get());
        let locale = resolver.initialize(Some("de-DE"));
        assert_eq!(locale, Language::SPANISH);
        assert_eq!(resolver.state(), ResolverState::Active(Language::SPANISH));
    }
}

#[test]
fn test_unsupported_stored_preference_defers_to_platform() {
    let dir = TempDir::new().unwrap();
    let mut store = temp_store(&dir);

    // A preference written by some future version of the site
    store.set(LOCALE_KEY, "fr").unwrap();

    let mut resolver = LocaleResolver::new(store, CatalogSet::get());
    assert_eq!(resolver.initialize(Some("es-AR")), Language::SPANISH);
}

#[test]
fn test_full_priority_chain_bottoms_out_at_fallback() {
    assert_eq!(resolve_initial_locale(Some("fr"), Some("de-DE")), Language::ENGLISH);
}

// ==================== Localized Rendering Tests ====================

#[test]
fn test_localized_project_copy_for_each_registry_id() {
    let store_dir = TempDir::new().unwrap();
    let mut resolver = LocaleResolver::new(temp_store(&store_dir), CatalogSet::get());
    resolver.initialize(None);
    resolver.set_locale(Language::SPANISH).unwrap();

    for project in ProjectRegistry::get().all() {
        let key = format!("projects.items.{}.description", project.id);
        match resolver.lookup(&key) {
            Resolved::Text(description) => {
                assert!(!description.is_empty(), "Project {} has empty copy", project.id);
            }
            other => panic!("Project {} has no localized copy: {:?}", project.id, other),
        }
    }
}

#[test]
fn test_missing_key_marker_reaches_the_caller() {
    let dir = TempDir::new().unwrap();
    let mut resolver = LocaleResolver::new(temp_store(&dir), CatalogSet::get());
    resolver.initialize(None);

    let resolved = resolver.lookup("projects.items.999.description");
    assert_eq!(
        resolved,
        Resolved::Missing("projects.items.999.description".to_string())
    );
}

// ==================== Catalog Congruence Tests ====================

#[test]
fn test_all_shipped_locales_match_fallback_shape() {
    let set = CatalogSet::get();
    let reference = set.catalog(set.fallback_language()).unwrap();

    for other in set.catalogs() {
        if other.language() == reference.language() {
            continue;
        }
        let report = CatalogValidator::validate(reference, other);
        assert!(
            report.is_clean(),
            "Catalog '{}' drifted: errors={:?} warnings={:?}",
            other.language().code(),
            report.errors,
            report.warnings
        );
    }
}
