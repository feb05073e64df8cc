use std::path::Path;

use indexmap::IndexMap;

use super::config::HelperConfig;
use super::document;
use super::error::Result;
use super::headings;
use super::output_formats::{self, FormatListStyle};
use super::request::Request;
use super::types::*;

/// Entry point for theme templates.
///
/// Holds the validated site configuration. Every helper takes the current
/// `Request` explicitly and returns its markup instead of printing it, so one
/// instance can serve any number of requests concurrently.
#[derive(Debug, Clone, Default)]
pub struct ThemeHelpers {
    config: HelperConfig,
}

impl ThemeHelpers {
    pub fn new(config: HelperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load and validate a YAML helper configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            config: HelperConfig::from_file(path)?,
        })
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Header cells for a sortable browse table.
    pub fn browse_headings(&self, request: &Request, headings: &[Heading]) -> Vec<HeadingCell> {
        headings::browse_headings(&self.config, request, headings)
    }

    /// Markup of `browse_headings`: one `<th>` per heading.
    pub fn render_browse_headings(&self, request: &Request, headings: &[Heading]) -> String {
        headings::render(&self.browse_headings(request, headings))
    }

    pub fn current_action_contexts(&self, request: &Request) -> Vec<String> {
        output_formats::current_action_contexts(&self.config, request)
    }

    /// Links to every output format of the current action, or `None` when the
    /// action has none.
    pub fn output_format_list(&self, request: &Request, style: &FormatListStyle) -> Option<String> {
        output_formats::output_format_list(&self.config, request, style)
    }

    pub fn auto_discovery_link_tags(&self, request: &Request) -> String {
        document::auto_discovery_link_tags(&self.config, request)
    }

    pub fn body_tag(&self, attributes: &IndexMap<String, String>) -> String {
        document::body_tag(attributes)
    }

    pub fn option(&self, name: &str) -> String {
        document::option(&self.config, name)
    }
}
