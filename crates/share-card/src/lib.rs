//! Share Card - Open Graph preview pages for shared 3D models.
//!
//! The model viewer is a client-rendered page, so link-preview crawlers
//! see nothing useful when they fetch it. This crate serves a small HTML
//! document with Open Graph and Twitter Card tags for a shared file and
//! then sends the browser on to the viewer with the same `file` parameter.
//! Pages are cacheable and intended to sit behind a CDN.
//!
//! # Architecture
//!
//! - **Share**: Derives file name, preview image URL and texts from the query
//! - **Render**: Generates the page with maud; every dynamic value is escaped
//! - **Routes**: axum router with `Cache-Control` headers for CDN caching
//!
//! # URL Pattern
//!
//! ```text
//! GET /api/share?file=<name or URL>&debug=true
//! ```
//!
//! - `file=model.glb` - image from the media host: `<media>/model.jpg`
//! - `file=https://host/path/model.glb` - image at `https://host/path/model.jpg`
//! - no `file` - default logo, title and description
//! - `debug=true` - show derived values instead of redirecting
//!
//! # Security
//!
//! - All interpolated text is HTML-escaped, including `'`
//! - The file value inside the redirect script is a JSON string with `<`,
//!   `>` and `&` written as unicode escapes
//! - Content-Security-Policy only permits the inline script and HTTPS images

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod share;
pub mod state;

pub use config::Config;
pub use error::ConfigError;
pub use routes::router;
pub use share::ShareMetadata;
pub use state::AppState;
