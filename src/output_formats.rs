use crate::config::HelperConfig;
use crate::escape::html_escape;
use crate::links::{build_url, with_param};
use crate::request::Request;

pub const DEFAULT_DELIMITER: &str = " | ";

/// How `output_format_list` lays out its links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatListStyle {
    /// `<ul>` with one `<li>` per format.
    #[default]
    List,
    /// Links inside a `<p>`, separated by the given markup.
    Delimited(String),
}

/// Output contexts available for the request's action, sorted.
pub(crate) fn current_action_contexts(config: &HelperConfig, request: &Request) -> Vec<String> {
    let mut contexts = config
        .contexts
        .get(&request.action)
        .cloned()
        .unwrap_or_default();
    contexts.sort();
    contexts
}

pub(crate) fn output_format_list(
    config: &HelperConfig,
    request: &Request,
    style: &FormatListStyle,
) -> Option<String> {
    let contexts = current_action_contexts(config, request);
    if contexts.is_empty() {
        tracing::debug!(action = %request.action, "no output formats for action");
        return None;
    }

    let links: Vec<String> = contexts
        .iter()
        .map(|context| {
            let params = with_param(&request.query, &config.output_param, context);
            format!(
                "<a href=\"{}\">{}</a>",
                html_escape(&build_url(&request.path, &params)),
                html_escape(context)
            )
        })
        .collect();

    let mut html = String::new();
    match style {
        FormatListStyle::List => {
            html.push_str("<ul id=\"output-format-list\">");
            for link in &links {
                html.push_str(&format!("<li>{}</li>", link));
            }
            html.push_str("</ul>");
        }
        FormatListStyle::Delimited(delimiter) => {
            html.push_str("<p id=\"output-format-list\">");
            html.push_str(&links.join(delimiter.as_str()));
            html.push_str("</p>");
        }
    }

    tracing::debug!(action = %request.action, formats = contexts.len(), "built output format list");
    Some(html)
}
