use url::form_urlencoded;

use crate::config::HelperConfig;
use crate::types::{is_unset, QueryParams, SortDirection};

/// The parts of the current HTTP request the helpers read.
///
/// Built by the caller from whatever web framework is serving the page and
/// passed to every helper explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Path of the current page, without query string.
    pub path: String,
    /// Controller action being rendered (`browse`, `show`, ...).
    pub action: String,
    pub query: QueryParams,
}

impl Request {
    pub fn new(path: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            action: action.into(),
            query: QueryParams::new(),
        }
    }

    /// Split a request URI such as `/items/browse?sort=title&page=2` into
    /// path and decoded query parameters. A repeated key keeps its first
    /// position and its last value.
    pub fn parse(uri: &str) -> Self {
        // Fragments never reach the server, drop one if the caller left it on.
        let uri = uri.split_once('#').map_or(uri, |(u, _)| u);
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, query),
            None => (uri, ""),
        };

        let query = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self {
            path: path.to_string(),
            action: String::new(),
            query,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Trimmed value of a query parameter, `""` when absent.
    pub fn param(&self, name: &str) -> &str {
        self.query.get(name).map_or("", |v| v.trim())
    }

    /// Column the current page is sorted by, if any. A blank or `"0"` value
    /// means the page is unsorted.
    pub fn current_sort(&self, config: &HelperConfig) -> Option<&str> {
        Some(self.param(&config.sort_param)).filter(|s| !is_unset(s))
    }

    pub fn current_direction(&self, config: &HelperConfig) -> SortDirection {
        SortDirection::from_param(self.param(&config.sort_dir_param))
    }
}
