use indexmap::IndexMap;

use crate::config::HelperConfig;
use crate::escape::html_escape;
use crate::links::{build_url, with_param};
use crate::request::Request;

/// `<link rel="alternate">` tags so browsers can discover the item feeds.
///
/// Each feed URL is the items browse page with the current query and the
/// output parameter set to the feed's format, so a filtered browse page
/// advertises a filtered feed.
pub(crate) fn auto_discovery_link_tags(config: &HelperConfig, request: &Request) -> String {
    config
        .feeds
        .iter()
        .map(|feed| {
            let params = with_param(&request.query, &config.output_param, &feed.format);
            let href = build_url(&config.items_browse_path, &params);
            format!(
                "<link rel=\"alternate\" type=\"{}\" title=\"{}\" href=\"{}\" />",
                feed.kind.mime_type(),
                html_escape(&config.feed_title(feed)),
                html_escape(&href)
            )
        })
        .collect()
}

/// Serialize attributes as ` key="value"` pairs, in order.
pub(crate) fn tag_attributes(attributes: &IndexMap<String, String>) -> String {
    attributes
        .iter()
        .map(|(key, value)| (key.trim(), value))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| format!(" {}=\"{}\"", html_escape(key), html_escape(value)))
        .collect()
}

pub(crate) fn body_tag(attributes: &IndexMap<String, String>) -> String {
    format!("<body{}>\n", tag_attributes(attributes))
}

/// Escaped value of a site option, `""` when it is not set.
pub(crate) fn option(config: &HelperConfig, name: &str) -> String {
    config
        .options
        .get(name)
        .map(|v| html_escape(v).into_owned())
        .unwrap_or_default()
}
