//! Shared HTML components for share pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Content-Security-Policy header value.
///
/// Allows the inline redirect script and inline styles. No external
/// scripts, no frames, only HTTPS images (favicon).
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline'; img-src https: data:; form-action 'none'; frame-ancestors 'none'";

/// Inline style for the debug panel.
const DEBUG_PANEL_STYLE: &str = "padding: 20px; font-family: Arial; background: #f0f0f0;";

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped value ready for interpolation into markup.
pub fn text(value: &str) -> PreEscaped<String> {
    PreEscaped(escape_html(value))
}

/// Open Graph / Twitter Card metadata for a page.
pub struct OpenGraphData<'a> {
    /// OG title.
    pub title: &'a str,
    /// OG description.
    pub description: &'a str,
    /// Canonical URL of the page.
    pub url: &'a str,
    /// OG image URL (always JPEG).
    pub image: &'a str,
    pub image_width: u32,
    pub image_height: u32,
    /// Twitter card type ("summary", "summary_large_image").
    pub twitter_card_type: &'a str,
}

/// Render the full HTML page shell with `<head>`, OG tags, and body content.
pub fn page_shell(
    lang: &str,
    favicon_url: &str,
    og: &OpenGraphData<'_>,
    body_content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(text(lang)) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (text(og.title)) }
                link rel="icon" type="image/png" href=(text(favicon_url));

                // Open Graph
                meta property="og:title" content=(text(og.title));
                meta property="og:description" content=(text(og.description));
                meta property="og:type" content="website";
                meta property="og:image" content=(text(og.image));
                meta property="og:image:type" content="image/jpeg";
                meta property="og:image:width" content=(og.image_width);
                meta property="og:image:height" content=(og.image_height);
                meta property="og:url" content=(text(og.url));

                // Twitter Card
                meta name="twitter:card" content=(text(og.twitter_card_type));
                meta name="twitter:title" content=(text(og.title));
                meta name="twitter:description" content=(text(og.description));
                meta name="twitter:image" content=(text(og.image));
            }
            body {
                (body_content)
            }
        }
    }
}

/// Render the client-side redirect plus a `<noscript>` fallback link.
pub fn redirect_body(script_source: &str, target: &str) -> Markup {
    html! {
        script { (PreEscaped(script_source)) }
        noscript {
            p { "Redirecting..." }
            p {
                "If you are not redirected, "
                a href=(text(target)) { "click here" }
                "."
            }
        }
    }
}

/// Render the debug panel showing the values behind the meta tags.
pub fn debug_panel(file: &str, image_url: &str, title: &str, target: &str) -> Markup {
    let file = if file.is_empty() { "none" } else { file };

    html! {
        div style=(DEBUG_PANEL_STYLE) {
            h2 { "Debug Mode - Meta Tags Preview" }
            p { strong { "File:" } " " (text(file)) }
            p { strong { "Image URL:" } " " (text(image_url)) }
            p { strong { "Title:" } " " (text(title)) }
            hr;
            p { a href=(text(target)) { "Go to main page" } }
        }
    }
}
