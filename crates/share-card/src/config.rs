//! Application configuration loaded from environment variables.

use std::str::FromStr;

use crate::error::ConfigError;

/// Image shown when no file is requested.
pub const DEFAULT_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/piodeer/LinkTree/main/media/logo.jpg";

/// Prefix for per-model preview images (`<prefix><name>.jpg`).
pub const DEFAULT_MEDIA_BASE_URL: &str =
    "https://raw.githubusercontent.com/piodeer/LinkTree/main/media/";

/// Favicon, pinned to a commit so it never changes under cached pages.
pub const DEFAULT_FAVICON_URL: &str = "https://raw.githubusercontent.com/piodeer/LinkTree/392c8bf5eb91d04289f23203c18cde1a75bd345f/media/logo.png";

/// Client-side application page that receives the `file` parameter.
pub const DEFAULT_APP_PATH: &str = "/index.html";

pub const DEFAULT_TITLE: &str = "3D Model Download - piodeer";

pub const DEFAULT_DESCRIPTION: &str = "Preview and download your 3D model.";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Public base URL of this service, without trailing slash.
    /// Combined with the request path to form `og:url`.
    pub base_url: String,

    /// Fallback preview image.
    pub default_image_url: String,

    /// Prefix that relative file names are appended to.
    pub media_base_url: String,

    pub favicon_url: String,

    /// Path the browser is redirected to.
    pub app_path: String,

    pub default_title: String,

    pub default_description: String,

    /// `lang` attribute of the rendered document.
    pub lang: String,

    /// Advertised `og:image:width`.
    pub image_width: u32,

    /// Advertised `og:image:height`.
    pub image_height: u32,

    /// Twitter card type ("summary" or "summary_large_image").
    pub twitter_card: String,

    /// Delay before the client-side redirect fires, in milliseconds.
    pub redirect_delay_ms: u64,

    /// Used for both `max-age` and `s-maxage`.
    pub cache_max_age: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            favicon_url: DEFAULT_FAVICON_URL.to_string(),
            app_path: DEFAULT_APP_PATH.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
            lang: "de".to_string(),
            image_width: 1200,
            image_height: 630,
            twitter_card: "summary_large_image".to_string(),
            redirect_delay_ms: 100,
            cache_max_age: 300,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults)
    ///
    /// Optional:
    /// - `SHARE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `SHARE_BASE_URL`: Public base URL for `og:url` (default: "http://localhost:8080")
    /// - `SHARE_DEFAULT_IMAGE_URL`: Fallback preview image
    /// - `SHARE_MEDIA_BASE_URL`: Prefix for per-model images
    /// - `SHARE_FAVICON_URL`: Favicon URL
    /// - `SHARE_APP_PATH`: Redirect target (default: "/index.html")
    /// - `SHARE_DEFAULT_TITLE` / `SHARE_DEFAULT_DESCRIPTION`: Texts used without a file
    /// - `SHARE_LANG`: Document language (default: "de")
    /// - `SHARE_IMAGE_WIDTH` / `SHARE_IMAGE_HEIGHT`: OG image size (default: 1200x630)
    /// - `SHARE_TWITTER_CARD`: Card type (default: "summary_large_image")
    /// - `SHARE_REDIRECT_DELAY_MS`: Redirect delay (default: 100)
    /// - `SHARE_CACHE_MAX_AGE`: Cache lifetime in seconds (default: 300)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL does not parse or a numeric
    /// setting is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = env_string("SHARE_BASE_URL", defaults.base_url)
            .trim_end_matches('/')
            .to_string();
        if let Err(source) = url::Url::parse(&base_url) {
            return Err(ConfigError::InvalidBaseUrl {
                value: base_url,
                source,
            });
        }

        let config = Self {
            bind_addr: env_string("SHARE_BIND_ADDR", defaults.bind_addr),
            base_url,
            default_image_url: env_string("SHARE_DEFAULT_IMAGE_URL", defaults.default_image_url),
            media_base_url: env_string("SHARE_MEDIA_BASE_URL", defaults.media_base_url),
            favicon_url: env_string("SHARE_FAVICON_URL", defaults.favicon_url),
            app_path: env_string("SHARE_APP_PATH", defaults.app_path),
            default_title: env_string("SHARE_DEFAULT_TITLE", defaults.default_title),
            default_description: env_string(
                "SHARE_DEFAULT_DESCRIPTION",
                defaults.default_description,
            ),
            lang: env_string("SHARE_LANG", defaults.lang),
            image_width: env_number("SHARE_IMAGE_WIDTH", defaults.image_width)?,
            image_height: env_number("SHARE_IMAGE_HEIGHT", defaults.image_height)?,
            twitter_card: env_string("SHARE_TWITTER_CARD", defaults.twitter_card),
            redirect_delay_ms: env_number("SHARE_REDIRECT_DELAY_MS", defaults.redirect_delay_ms)?,
            cache_max_age: env_number("SHARE_CACHE_MAX_AGE", defaults.cache_max_age)?,
        };

        tracing::info!(
            bind_addr = %config.bind_addr,
            base_url = %config.base_url,
            media_base_url = %config.media_base_url,
            app_path = %config.app_path,
            twitter_card = %config.twitter_card,
            cache_max_age = config.cache_max_age,
            "share-card configuration loaded"
        );

        Ok(config)
    }
}

/// Read a string variable, falling back when unset or blank.
fn env_string(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default,
    }
}

/// Read a numeric variable, falling back when unset or blank.
fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "SHARE_BIND_ADDR",
        "SHARE_BASE_URL",
        "SHARE_DEFAULT_IMAGE_URL",
        "SHARE_MEDIA_BASE_URL",
        "SHARE_FAVICON_URL",
        "SHARE_APP_PATH",
        "SHARE_DEFAULT_TITLE",
        "SHARE_DEFAULT_DESCRIPTION",
        "SHARE_LANG",
        "SHARE_IMAGE_WIDTH",
        "SHARE_IMAGE_HEIGHT",
        "SHARE_TWITTER_CARD",
        "SHARE_REDIRECT_DELAY_MS",
        "SHARE_CACHE_MAX_AGE",
    ];

    /// Helper to run config tests with isolated env vars.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.default_image_url, DEFAULT_IMAGE_URL);
            assert_eq!(config.media_base_url, DEFAULT_MEDIA_BASE_URL);
            assert_eq!(config.favicon_url, DEFAULT_FAVICON_URL);
            assert_eq!(config.app_path, "/index.html");
            assert_eq!(config.default_title, DEFAULT_TITLE);
            assert_eq!(config.default_description, DEFAULT_DESCRIPTION);
            assert_eq!(config.lang, "de");
            assert_eq!((config.image_width, config.image_height), (1200, 630));
            assert_eq!(config.twitter_card, "summary_large_image");
            assert_eq!(config.redirect_delay_ms, 100);
            assert_eq!(config.cache_max_age, 300);
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("SHARE_BIND_ADDR", "127.0.0.1:9090"),
                ("SHARE_BASE_URL", "https://share.example.com"),
                ("SHARE_MEDIA_BASE_URL", "https://cdn.example.com/previews/"),
                ("SHARE_IMAGE_WIDTH", "800"),
                ("SHARE_IMAGE_HEIGHT", "800"),
                ("SHARE_TWITTER_CARD", "summary"),
                ("SHARE_CACHE_MAX_AGE", "60"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.base_url, "https://share.example.com");
                assert_eq!(config.media_base_url, "https://cdn.example.com/previews/");
                assert_eq!((config.image_width, config.image_height), (800, 800));
                assert_eq!(config.twitter_card, "summary");
                assert_eq!(config.cache_max_age, 60);
            },
        );
    }

    #[test]
    fn config_base_url_trailing_slash_stripped() {
        with_env_vars(&[("SHARE_BASE_URL", "https://share.example.com/")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.base_url, "https://share.example.com");
        });
    }

    #[test]
    fn config_blank_values_use_defaults() {
        with_env_vars(&[("SHARE_LANG", "  "), ("SHARE_CACHE_MAX_AGE", "")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.lang, "de");
            assert_eq!(config.cache_max_age, 300);
        });
    }

    #[test]
    fn config_invalid_base_url() {
        with_env_vars(&[("SHARE_BASE_URL", "not a url")], || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
        });
    }

    #[test]
    fn config_invalid_number() {
        with_env_vars(&[("SHARE_IMAGE_WIDTH", "wide")], || {
            let err = Config::from_env().unwrap_err();
            assert_eq!(
                err.to_string(),
                "invalid value for SHARE_IMAGE_WIDTH: \"wide\" is not a number"
            );
        });
    }
}
