use indexmap::IndexMap;
use serde::Deserialize;

use super::{is_unset, SortDirection};
use crate::escape::html_escape;

/// One column of a browse table: a display label and the column it sorts by.
///
/// A heading without a column is not sortable and renders as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Heading {
    pub label: String,
    #[serde(default)]
    pub column: Option<String>,
}

impl Heading {
    pub fn sortable(label: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(label, column)
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column: None,
        }
    }

    /// Build a heading, treating an empty, all-whitespace or `"0"` column as
    /// "not sortable".
    pub fn new(label: impl Into<String>, column: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            label: label.into(),
            column: if is_unset(&column) {
                None
            } else {
                Some(column)
            },
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref().filter(|c| !is_unset(c))
    }

    pub fn is_sortable(&self) -> bool {
        self.column().is_some()
    }
}

impl<L: Into<String>, C: Into<String>> From<(L, C)> for Heading {
    fn from((label, column): (L, C)) -> Self {
        Self::new(label, column)
    }
}

/// Label → column mapping, the shape themes write heading lists in.
/// Insertion order is the column order.
pub type HeadingMap = IndexMap<String, String>;

pub fn headings_from_map(map: &HeadingMap) -> Vec<Heading> {
    map.iter()
        .map(|(label, column)| Heading::new(label.as_str(), column.as_str()))
        .collect()
}

/// A rendered table header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCell {
    pub label: String,
    /// Target URL for sortable headings, unescaped.
    pub href: Option<String>,
    /// Direction of the current sort when this heading is the active column.
    pub active: Option<SortDirection>,
}

impl HeadingCell {
    pub fn is_sortable(&self) -> bool {
        self.href.is_some()
    }

    pub fn class(&self) -> Option<&'static str> {
        self.active.map(|dir| dir.css_class())
    }

    pub fn to_html(&self) -> String {
        let label = html_escape(&self.label);
        let Some(href) = &self.href else {
            return format!("<th>{}</th>", label);
        };

        let class = self
            .class()
            .map(|class| format!(" class=\"{}\"", class))
            .unwrap_or_default();
        format!(
            "<th{}><a href=\"{}\">{}</a></th>",
            class,
            html_escape(href),
            label
        )
    }
}
