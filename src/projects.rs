//! Project registry: Single source of truth for all showcased projects.
//!
//! The registry is an ordered, immutable list of `Project` records defined at
//! build time. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access. Project `id` values are unique and
//! stable across deployments; other code uses them as keys into parallel
//! lookup tables (e.g. localized per-project descriptions in the message
//! catalogs).

use anyhow::{bail, Result};
use serde::Serialize;
use std::sync::OnceLock;

/// A showcased project.
///
/// Immutable value, never mutated or destroyed during the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Positive integer, unique across the registry. Also the modulus index
    /// into the gradient fallback palette.
    pub id: i64,

    /// Display title (canonical language).
    pub title: &'static str,

    /// Display description (canonical language).
    pub description: &'static str,

    /// Technologies in display order. Duplicates are permitted but discouraged.
    pub technologies: &'static [&'static str],

    /// Repository URL. Must match a `host/owner/repo` shape for the
    /// social-card derivation to succeed; if malformed, derivation degrades
    /// gracefully instead of failing.
    pub github: &'static str,

    /// Live demo URL. Absent, empty, or the legacy placeholder `"#"` all mean
    /// "no live demo".
    pub demo: Option<&'static str>,

    /// Short cosmetic display glyph.
    pub icon: &'static str,

    /// Badge: highlighted on the landing section.
    pub featured: bool,

    /// Badge: work in progress. Independent of `featured`.
    pub wip: bool,
}

impl Project {
    /// Whether the project has a usable live demo.
    ///
    /// Empty strings and the `"#"` placeholder are treated identically to an
    /// absent demo.
    pub fn has_demo(&self) -> bool {
        matches!(self.demo, Some(url) if !url.is_empty() && url != "#")
    }
}

/// Global project registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<ProjectRegistry> = OnceLock::new();

impl ProjectRegistry {
    /// Get the global project registry instance.
    pub fn get() -> &'static ProjectRegistry {
        REGISTRY.get_or_init(|| ProjectRegistry {
            projects: default_projects(),
        })
    }

    /// All projects, in display order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by its stable id.
    pub fn get_by_id(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// All projects with the `featured` badge, in display order.
    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Validate registry invariants: unique positive ids and non-empty
    /// display strings.
    ///
    /// Run from tests and the check binary, never at render time.
    pub fn validate(&self) -> Result<()> {
        for (index, project) in self.projects.iter().enumerate() {
            if project.id <= 0 {
                bail!("Project at index {} has non-positive id {}", index, project.id);
            }
            if project.title.is_empty() {
                bail!("Project {} has an empty title", project.id);
            }
            if project.description.is_empty() {
                bail!("Project {} has an empty description", project.id);
            }
            let duplicates = self
                .projects
                .iter()
                .filter(|other| other.id == project.id)
                .count();
            if duplicates > 1 {
                bail!("Project id {} appears {} times", project.id, duplicates);
            }
        }
        Ok(())
    }
}

/// Default project records.
///
/// Display order matters: this is the order the presentation layer renders.
fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "FURIA FC - Team Management",
            description: "Complete platform for managing a women's football team with \
                          attendance tracking, an event calendar, player statistics and \
                          real-time match results.",
            technologies: &["React", "TypeScript", "Firebase", "Vite"],
            github: "https://github.com/rodrigofrende/furiaFC-Schecule",
            demo: Some("https://furiafutbolclub.netlify.app"),
            icon: "⚽",
            featured: true,
            wip: false,
        },
        Project {
            id: 2,
            title: "RF3D Shop",
            description: "Modern e-commerce for selling 3D models with a shopping cart, \
                          filtering system and interactive gallery. Includes product \
                          management and a full checkout.",
            technologies: &["Vue.js", "Pinia", "CSS3", "JavaScript"],
            github: "https://github.com/rodrigofrende/rf3d-shop",
            demo: Some("https://rf3d.netlify.app"),
            icon: "🎨",
            featured: true,
            wip: false,
        },
        Project {
            id: 3,
            title: "Poké Palette",
            description: "Color palette generator inspired by Pokémon. Extracts dominant \
                          colors from official sprites and exports to multiple formats \
                          (HEX, RGB, HSL).",
            technologies: &["React", "PokeAPI", "Canvas API", "TypeScript"],
            github: "https://github.com/rodrigofrende/Poke-palette",
            demo: Some("https://pokepalette.netlify.app/"),
            icon: "🎮",
            featured: false,
            wip: true,
        },
        Project {
            id: 4,
            title: "UI Storybook",
            description: "Library of reusable UI components documented with Storybook. \
                          Includes buttons, cards, modals, forms and more, with variants \
                          and interactive states.",
            technologies: &["Storybook", "React", "TypeScript", "CSS Modules"],
            github: "https://github.com/rodrigofrende/UI-Storybook",
            demo: None,
            icon: "📚",
            featured: false,
            wip: true,
        },
        Project {
            id: 5,
            title: "Confetti Counter",
            description: "Interactive counter with celebratory confetti effects. \
                          Implements canvas animations, local persistence and \
                          customizable sounds for specific milestones.",
            technologies: &["React", "TypeScript", "Web Audio API", "Tailwind CSS"],
            github: "https://github.com/rodrigofrende/confettiCounter",
            demo: Some("https://moneymetrics.netlify.app"),
            icon: "🎉",
            featured: false,
            wip: false,
        },
    ]
}
