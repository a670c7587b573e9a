//! HTML rendering for share pages.
//!
//! A share page is a complete document whose `<head>` carries the Open
//! Graph and Twitter Card tags, and whose body either redirects the browser
//! to the application or, in debug mode, shows the derived values.
//!
//! Pages are built with [maud](https://maud.lambda.xyz/). Every dynamic
//! value goes through [`components::escape_html`], which also escapes `'`.

pub mod components;
pub mod redirect;

use maud::Markup;

use crate::config::Config;
use crate::share::ShareMetadata;
use components::{OpenGraphData, debug_panel, page_shell, redirect_body};

/// Render the share page for derived metadata.
pub fn render_share_page(meta: &ShareMetadata, config: &Config) -> Markup {
    let og = OpenGraphData {
        title: &meta.title,
        description: &meta.description,
        url: &meta.current_url,
        image: &meta.image_url,
        image_width: config.image_width,
        image_height: config.image_height,
        twitter_card_type: &config.twitter_card,
    };

    let target = redirect::app_target(&config.app_path, &meta.raw_file);

    let body = if meta.debug {
        debug_panel(&meta.raw_file, &meta.image_url, &meta.title, &target)
    } else {
        let script =
            redirect::redirect_script(&config.app_path, &meta.raw_file, config.redirect_delay_ms);
        redirect_body(&script, &target)
    };

    page_shell(&config.lang, &config.favicon_url, &og, body)
}
