//! Image resolution: choose the best available visual for a project.
//!
//! Resolution is pure string construction — no network call is ever made
//! here. Whether the resulting URL is reachable is a rendering-layer concern
//! (broken-image fallback); only structural absence of data is detected at
//! resolution time.

use crate::projects::Project;
use regex::Regex;
use std::sync::OnceLock;

/// Fixed gradient palette for projects with no usable external image source.
///
/// Order matters: a project's gradient is `PALETTE[id mod PALETTE.len()]`,
/// so reordering entries changes every project's placeholder visual.
pub const GRADIENT_PALETTE: [&str; 5] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
];

/// The single best-available visual representation for a project.
///
/// There is no error variant: resolution always produces a usable visual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Live screenshot of the project's demo, served by the screenshot
    /// provider. A *live preview* claim: depends only on the demo URL being
    /// syntactically present, not on it being reachable.
    RemoteScreenshot { url: String },

    /// Auto-generated social-card image for the project's repository.
    SocialCard { url: String },

    /// Deterministic CSS gradient placeholder, stable for a given project id.
    Gradient { css: &'static str },
}

// Cached pattern for owner/repo extraction (first two path segments after
// the host, any scheme/host).
static OWNER_REPO_REGEX: OnceLock<Regex> = OnceLock::new();

fn owner_repo_regex() -> &'static Regex {
    OWNER_REPO_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^/]+/([^/?#]+)/([^/?#]+)").unwrap())
}

/// External image-service URL templates.
///
/// Built from [`crate::config::Config`]; `Default` uses the public providers.
#[derive(Debug, Clone)]
pub struct ImageProviders {
    screenshot_base: String,
    social_card_base: String,
}

impl Default for ImageProviders {
    fn default() -> Self {
        Self {
            screenshot_base: "https://api.microlink.io".to_string(),
            social_card_base: "https://opengraph.githubassets.com".to_string(),
        }
    }
}

impl ImageProviders {
    /// Create providers with explicit base URLs (trailing slashes tolerated).
    pub fn new(screenshot_base: impl Into<String>, social_card_base: impl Into<String>) -> Self {
        Self {
            screenshot_base: trim_trailing_slash(screenshot_base.into()),
            social_card_base: trim_trailing_slash(social_card_base.into()),
        }
    }

    /// Build a screenshot-service URL for a demo link.
    ///
    /// Returns `None` when the demo is absent, empty, or the legacy `"#"`
    /// placeholder. The demo URL is percent-encoded into the template.
    pub fn screenshot_url(&self, demo: Option<&str>) -> Option<String> {
        let demo = demo?;
        if demo.is_empty() || demo == "#" {
            return None;
        }
        Some(format!(
            "{}/?url={}&screenshot=true&meta=false&embed=screenshot.url",
            self.screenshot_base,
            urlencoding::encode(demo)
        ))
    }

    /// Build a social-card URL from a repository link.
    ///
    /// Extracts the first two path segments after the host. Returns `None`
    /// when the owner/repo cannot be extracted — never an error. No
    /// URL-encoding is applied to owner/repo (already URL-safe under source
    /// hosting naming rules).
    pub fn social_card_url(&self, github: &str) -> Option<String> {
        let captures = owner_repo_regex().captures(github)?;
        let owner = captures.get(1)?.as_str();
        let repo = captures.get(2)?.as_str();
        Some(format!("{}/1/{}/{}", self.social_card_base, owner, repo))
    }

    /// Resolve the single best-available visual for a project.
    ///
    /// Strict priority order, first applicable wins:
    /// 1. usable demo → remote screenshot
    /// 2. parsable repository URL → social card
    /// 3. deterministic gradient keyed by project id
    ///
    /// Deterministic and side-effect-free: the same project always resolves
    /// to the same result.
    pub fn resolve_best_image(&self, project: &Project) -> ImageSource {
        if let Some(url) = self.screenshot_url(project.demo) {
            return ImageSource::RemoteScreenshot { url };
        }

        if let Some(url) = self.social_card_url(project.github) {
            return ImageSource::SocialCard { url };
        }

        ImageSource::Gradient {
            css: gradient_for_id(project.id),
        }
    }
}

/// Select the palette entry for a project id.
///
/// Uses a true modulo (`rem_euclid`) so the index is never negative even for
/// `id <= 0`, and floors to the first entry if indexing ever misses.
pub fn gradient_for_id(id: i64) -> &'static str {
    let index = id.rem_euclid(GRADIENT_PALETTE.len() as i64) as usize;
    GRADIENT_PALETTE
        .get(index)
        .copied()
        .unwrap_or(GRADIENT_PALETTE[0])
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
