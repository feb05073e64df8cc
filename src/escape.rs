use std::borrow::Cow;

/// Escape `s` for use in HTML text or a double/single quoted attribute value.
///
/// Replaces `&`, `<`, `>`, `"` and `'` (the same set PHP's
/// `htmlspecialchars` handles with `ENT_QUOTES`). Returns borrowed data when
/// nothing needs escaping.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
