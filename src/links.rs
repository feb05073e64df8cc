use url::form_urlencoded;

use crate::types::QueryParams;

/// Join `path` and `params` into a link target.
///
/// Parameters are form-urlencoded in map order (spaces become `+`, like PHP's
/// `http_build_query`). With no parameters the bare path is returned.
pub fn build_url(path: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, query)
}

/// Copy `params` with `key` set to `value`.
pub(crate) fn with_param(params: &QueryParams, key: &str, value: &str) -> QueryParams {
    let mut params = params.clone();
    params.insert(key.to_string(), value.to_string());
    params
}
