//! Share page route handler.
//!
//! Handles `GET /api/share?file=<name>&debug=<true|other>`.

use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::render;
use crate::share::ShareMetadata;
use crate::state::AppState;

/// Handle a share request.
///
/// Never fails: a missing or malformed `file` parameter falls back to the
/// default branding and the response is always `200 OK`.
pub async fn share_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let meta = ShareMetadata::from_request(&uri, &state.config);

    tracing::debug!(
        file = %meta.raw_file,
        image_url = %meta.image_url,
        debug = meta.debug,
        "rendering share card"
    );

    let html = render::render_share_page(&meta, &state.config).into_string();

    build_response(html, cache_headers(state.config.cache_max_age))
}

/// Build an HTTP response with HTML content and security/cache headers.
fn build_response(html: String, cache_headers: HeaderMap) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(html.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    headers.extend(cache_headers);

    (StatusCode::OK, headers, html).into_response()
}

/// Shared (CDN) and browser caching for the same lifetime.
fn cache_headers(max_age: u32) -> HeaderMap {
    let mut headers = HeaderMap::new();

    let cache_value = format!("public, max-age={max_age}, s-maxage={max_age}");
    if let Ok(val) = HeaderValue::from_str(&cache_value) {
        headers.insert(header::CACHE_CONTROL, val);
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_headers_default_lifetime() {
        let headers = cache_headers(300);
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=300, s-maxage=300"
        );
    }

    #[test]
    fn build_response_sets_content_headers() {
        let response = build_response("<p>hi</p>".to_string(), cache_headers(60));
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=60, s-maxage=60"
        );
    }

    #[test]
    fn etag_is_stable_for_same_body() {
        let a = build_response("same".to_string(), HeaderMap::new());
        let b = build_response("same".to_string(), HeaderMap::new());
        let c = build_response("other".to_string(), HeaderMap::new());

        let etag = |r: &Response| r.headers().get(header::ETAG).cloned();
        assert!(etag(&a).is_some());
        assert_eq!(etag(&a), etag(&b));
        assert_ne!(etag(&a), etag(&c));
    }
}
