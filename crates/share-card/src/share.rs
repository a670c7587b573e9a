//! Share metadata derivation.
//!
//! Turns the `file` query parameter into the values a preview crawler needs:
//! a display name, a preview image URL, and title/description text. Every
//! function here is pure; the same URI and config always yield the same
//! [`ShareMetadata`].

use axum::http::Uri;
use url::{Url, form_urlencoded};

use crate::config::Config;

/// Metadata derived from a single share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMetadata {
    /// Trimmed `file` parameter as received (empty when absent).
    pub raw_file: String,
    /// Last path segment of the file name.
    pub base_file_name: String,
    /// `base_file_name` without its final extension.
    pub base_without_ext: String,
    /// Preview image advertised in `og:image`.
    pub image_url: String,
    pub title: String,
    pub description: String,
    /// Full URL of this request, used for `og:url`.
    pub current_url: String,
    /// `debug=true` was requested.
    pub debug: bool,
}

impl ShareMetadata {
    /// Derive metadata for a request URI.
    pub fn from_request(uri: &Uri, config: &Config) -> Self {
        let query = uri.query();
        let raw_file = query_param(query, "file")
            .map(|f| trim_file(&f).to_string())
            .unwrap_or_default();
        let debug = query_param(query, "debug").as_deref() == Some("true");

        Self::derive(raw_file, current_url(&config.base_url, uri), debug, config)
    }

    /// Derive metadata from an already-extracted `file` value.
    pub fn derive(raw_file: String, current_url: String, debug: bool, config: &Config) -> Self {
        let base_file_name = base_file_name(clean_file_name(&raw_file)).to_string();
        let base_without_ext = strip_extension(&base_file_name).to_string();
        let image_url = image_url(&raw_file, &base_without_ext, config);

        let (title, description) = if base_file_name.is_empty() {
            (
                config.default_title.clone(),
                config.default_description.clone(),
            )
        } else {
            (
                format!("{base_file_name} - Download"),
                format!("Download {base_file_name} - 3D Model"),
            )
        };

        Self {
            raw_file,
            base_file_name,
            base_without_ext,
            image_url,
            title,
            description,
            current_url,
            debug,
        }
    }
}

/// First value of a query parameter, form-decoded.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Trim surrounding whitespace, including the byte order mark (U+FEFF).
pub fn trim_file(file: &str) -> &str {
    file.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Reconstruct the absolute URL of a request.
///
/// Origin-form URIs (the usual case behind a proxy) are resolved against the
/// configured public base URL.
pub fn current_url(base_url: &str, uri: &Uri) -> String {
    let raw = if uri.scheme().is_some() {
        uri.to_string()
    } else {
        let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
        format!("{base_url}{path_and_query}")
    };

    Url::parse(&raw).map(String::from).unwrap_or(raw)
}

/// Strip leading slashes from a file name.
pub fn clean_file_name(file: &str) -> &str {
    file.trim_start_matches('/')
}

/// Last `/`-separated segment, or the whole name when that segment is empty.
pub fn base_file_name(clean: &str) -> &str {
    match clean.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => clean,
    }
}

/// Remove the final extension: a trailing `.` followed by at least one
/// character that is neither `.` nor `/`.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => {
            let ext = &name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                name
            } else {
                &name[..dot]
            }
        }
        None => name,
    }
}

/// Whether the file parameter is a full external URL.
pub fn is_external_url(file: &str) -> bool {
    file.starts_with("http://") || file.starts_with("https://")
}

/// Pick the preview image for a file.
///
/// Empty file: the default image. External URL: its final extension
/// replaced by `.jpg`, or the URL untouched when it has none. Anything else:
/// `<media_base_url><base_without_ext>.jpg`.
pub fn image_url(file: &str, base_without_ext: &str, config: &Config) -> String {
    if file.is_empty() {
        config.default_image_url.clone()
    } else if is_external_url(file) {
        let stripped = strip_extension(file);
        if stripped.len() == file.len() {
            file.to_string()
        } else {
            format!("{stripped}.jpg")
        }
    } else {
        format!("{}{base_without_ext}.jpg", config.media_base_url)
    }
}
