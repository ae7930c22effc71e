//! Locale catalogs: one nested message tree per supported locale.
//!
//! Each locale has exactly one authoritative tree, embedded from
//! `i18n/<code>.json` at compile time. Key paths are plain dot-separated
//! segments (e.g. `hero.cta.viewWork`). Localized per-project copy lives
//! under `projects.items.<id>`, keyed by the stable registry id.
//!
//! Catalogs are inert data: all fallback and missing-key policy lives in the
//! resolver, and congruence across locales is checked by the validator (at
//! test time, never at render time).

use crate::i18n::Language;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A node in a locale's message tree: a display string, an ordered sequence
/// of display strings, or a further nested mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageNode {
    Text(String),
    List(Vec<String>),
    Tree(BTreeMap<String, MessageNode>),
}

impl MessageNode {
    /// Node kind label, used in congruence reports.
    pub fn kind(&self) -> &'static str {
        match self {
            MessageNode::Text(_) => "text",
            MessageNode::List(_) => "list",
            MessageNode::Tree(_) => "tree",
        }
    }

    /// Walk a dot-separated key path from this node.
    ///
    /// Returns `None` as soon as any segment is absent or a non-tree node is
    /// reached with segments remaining.
    pub fn resolve(&self, key_path: &str) -> Option<&MessageNode> {
        let mut node = self;
        for segment in key_path.split('.') {
            match node {
                MessageNode::Tree(children) => node = children.get(segment)?,
                _ => return None,
            }
        }
        Some(node)
    }
}

/// The message tree for a single locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    language: Language,
    root: MessageNode,
}

impl MessageCatalog {
    /// Parse a catalog from its JSON source.
    pub fn parse(language: Language, source: &str) -> Result<Self> {
        let root: MessageNode = serde_json::from_str(source)
            .with_context(|| format!("Failed to parse message catalog for '{}'", language.code()))?;
        Ok(Self { language, root })
    }

    /// The locale this catalog belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a dot-separated key path against this catalog's tree.
    pub fn resolve(&self, key_path: &str) -> Option<&MessageNode> {
        self.root.resolve(key_path)
    }

    /// Every leaf key path in this catalog (text and list nodes), in sorted
    /// order. Used by the congruence validator.
    pub fn key_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(&self.root, String::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(node: &MessageNode, prefix: String, paths: &mut Vec<String>) {
    match node {
        MessageNode::Tree(children) => {
            for (key, child) in children {
                let child_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaf_paths(child, child_prefix, paths);
            }
        }
        MessageNode::Text(_) | MessageNode::List(_) => paths.push(prefix),
    }
}

/// All enabled locales' catalogs plus the designated fallback locale.
pub struct CatalogSet {
    catalogs: Vec<MessageCatalog>,
    fallback: Language,
}

/// Global catalog set (initialized lazily from the embedded trees)
static CATALOGS: OnceLock<CatalogSet> = OnceLock::new();

impl CatalogSet {
    /// Get the global catalog set.
    ///
    /// # Panics
    /// Panics if an embedded catalog does not parse; the trees are
    /// compile-time assets, so this indicates a build error, not a runtime
    /// condition.
    pub fn get() -> &'static CatalogSet {
        CATALOGS.get_or_init(|| {
            CatalogSet::from_sources(vec![
                (Language::ENGLISH, include_str!("../../i18n/en.json")),
                (Language::SPANISH, include_str!("../../i18n/es.json")),
            ])
            .expect("Embedded message catalogs should parse")
        })
    }

    /// Build a catalog set from raw JSON sources. The designated fallback
    /// locale comes from the language registry.
    pub fn from_sources(sources: Vec<(Language, &str)>) -> Result<Self> {
        let catalogs = sources
            .into_iter()
            .map(|(language, source)| MessageCatalog::parse(language, source))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            catalogs,
            fallback: Language::fallback(),
        })
    }

    /// The catalog for a locale, if loaded.
    pub fn catalog(&self, language: Language) -> Option<&MessageCatalog> {
        self.catalogs.iter().find(|c| c.language() == language)
    }

    /// All loaded catalogs.
    pub fn catalogs(&self) -> &[MessageCatalog] {
        &self.catalogs
    }

    /// The single designated fallback locale.
    pub fn fallback_language(&self) -> Language {
        self.fallback
    }
}
