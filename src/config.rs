use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Feeds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Rss,
    Atom,
}

impl FeedKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Rss => "application/rss+xml",
            Self::Atom => "application/atom+xml",
        }
    }
}

/// A syndication feed advertised through `<link rel="alternate">`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// Value of the output parameter that selects this feed (`rss2`, `atom`).
    pub format: String,
    pub kind: FeedKind,
    pub title: String,
}

fn default_feeds() -> Vec<FeedConfig> {
    vec![
        FeedConfig {
            format: "rss2".into(),
            kind: FeedKind::Rss,
            title: "RSS Feed".into(),
        },
        FeedConfig {
            format: "atom".into(),
            kind: FeedKind::Atom,
            title: "Atom Feed".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// HelperConfig
// ---------------------------------------------------------------------------

/// Site-level settings the helpers read instead of framework globals.
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Query parameter holding the active sort column.
    pub sort_param: String,
    /// Query parameter holding the active sort direction (`a` / `d`).
    pub sort_dir_param: String,
    /// Query parameter selecting an output context.
    pub output_param: String,
    /// Path the feed links point at.
    pub items_browse_path: String,
    /// Output contexts available per controller action.
    pub contexts: IndexMap<String, Vec<String>>,
    pub feeds: Vec<FeedConfig>,
    pub site_title: String,
    /// Display options, looked up by `ThemeHelpers::option`.
    pub options: IndexMap<String, String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            sort_param: "sort".into(),
            sort_dir_param: "sortdir".into(),
            output_param: "output".into(),
            items_browse_path: "/items/browse".into(),
            contexts: IndexMap::new(),
            feeds: default_feeds(),
            site_title: String::new(),
            options: IndexMap::new(),
        }
    }
}

impl HelperConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading helper config");
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parameter names must be non-empty and distinct, otherwise one helper
    /// would overwrite another's parameter in the generated links.
    pub fn validate(&self) -> Result<()> {
        let params = [
            ("sort_param", &self.sort_param),
            ("sort_dir_param", &self.sort_dir_param),
            ("output_param", &self.output_param),
        ];

        for (field, value) in params {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} cannot be empty", field)));
            }
        }

        for (i, (field, value)) in params.iter().enumerate() {
            if let Some((other, _)) = params[i + 1..].iter().find(|(_, v)| v == value) {
                return Err(Error::Config(format!(
                    "{} and {} both use the parameter '{}'",
                    field, other, value
                )));
            }
        }

        tracing::debug!(
            sort = %self.sort_param,
            sort_dir = %self.sort_dir_param,
            actions = self.contexts.len(),
            "helper config validated"
        );
        Ok(())
    }

    /// Title shown for a feed link, prefixed with the site title when set.
    pub fn feed_title(&self, feed: &FeedConfig) -> String {
        if self.site_title.trim().is_empty() {
            feed.title.clone()
        } else {
            format!("{} {}", self.site_title.trim(), feed.title)
        }
    }
}
