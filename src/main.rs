use anyhow::Result;
use portfolio_core::config::Config;
use portfolio_core::i18n::{CatalogSet, LocaleResolver, Resolved};
use portfolio_core::images::{ImageProviders, ImageSource};
use portfolio_core::prefs::FilePreferenceStore;
use portfolio_core::projects::ProjectRegistry;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_core=info".parse()?),
        )
        .init();

    info!("Rendering portfolio preview");

    // Load configuration from environment
    let config = Config::from_env()?;
    let providers = ImageProviders::new(&config.screenshot_provider, &config.social_card_provider);

    // Resolve the session locale: stored preference, then platform language,
    // then the fallback floor
    let store = FilePreferenceStore::open(&config.prefs_path)?;
    let mut resolver = LocaleResolver::new(store, CatalogSet::get());
    let platform_language = std::env::var("LANG").ok();
    let locale = resolver.initialize(platform_language.as_deref());

    info!(locale = locale.code(), "Active locale");

    println!("{} — {}", resolver.text("hero.greeting"), resolver.text("hero.title"));
    println!();
    println!("## {}", resolver.text("projects.title"));
    println!();

    let registry = ProjectRegistry::get();
    for project in registry.all() {
        let title_key = format!("projects.items.{}.title", project.id);
        let title = match resolver.lookup(&title_key) {
            Resolved::Text(text) => text.to_string(),
            _ => project.title.to_string(),
        };

        let mut badges = Vec::new();
        if project.featured {
            badges.push(resolver.text("projects.badges.featured"));
        }
        if project.wip {
            badges.push(resolver.text("projects.badges.wip"));
        }
        let badge_suffix = if badges.is_empty() {
            String::new()
        } else {
            format!(" [{}]", badges.join(", "))
        };

        println!("{} {}{}", project.icon, title, badge_suffix);

        let description_key = format!("projects.items.{}.description", project.id);
        if let Resolved::Text(description) = resolver.lookup(&description_key) {
            println!("   {}", description);
        }
        println!("   {}", project.technologies.join(" · "));

        match providers.resolve_best_image(project) {
            ImageSource::RemoteScreenshot { url } => println!("   preview: {}", url),
            ImageSource::SocialCard { url } => println!("   card:    {}", url),
            ImageSource::Gradient { css } => println!("   visual:  {}", css),
        }
        println!();
    }

    info!("Portfolio preview rendered");
    Ok(())
}
