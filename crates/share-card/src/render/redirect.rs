//! Redirect targets and the inline script that follows them.
//!
//! Crawlers read the meta tags and stop; browsers run the script and land
//! on the client-side application with the original `file` value.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The [component percent-encode set](https://url.spec.whatwg.org/#component-percent-encode-set).
///
/// Matches JavaScript's `encodeURIComponent`, so the server-built fallback
/// link equals the URL the script navigates to.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Application URL for a file: `<app_path>?file=<encoded>`, or just
/// `<app_path>` when the file is empty.
pub fn app_target(app_path: &str, file: &str) -> String {
    if file.is_empty() {
        app_path.to_string()
    } else {
        format!("{app_path}?file={}", utf8_percent_encode(file, COMPONENT))
    }
}

/// Encode a string as a JavaScript string literal safe to embed in `<script>`.
///
/// JSON string escaping plus `<`, `>` and `&` as unicode escapes, so the
/// value can never close the script element or open a comment.
pub fn script_string(value: &str) -> String {
    let json = serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());

    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline script that navigates to the application after `delay_ms`.
pub fn redirect_script(app_path: &str, file: &str, delay_ms: u64) -> String {
    let file = script_string(file);
    let app_path = script_string(app_path);

    format!(
        r#"
// Small delay so crawlers that execute scripts still see the meta tags
setTimeout(function() {{
  const file = {file};
  if (file) {{
    window.location.href = {app_path} + '?file=' + encodeURIComponent(file);
  }} else {{
    window.location.href = {app_path};
  }}
}}, {delay_ms});
"#
    )
}
