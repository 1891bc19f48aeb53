mod api;
mod app;
mod components;
mod form;
mod logging;
mod modal_context;
mod pages;

use app::App;
use instaclean_booking::SiteConfig;
use leptos::prelude::*;

fn main() {
    let config = match SiteConfig::from_build_env() {
        Ok(config) => {
            logging::init(&config.log_filter);
            config
        }
        Err(e) => {
            let config = SiteConfig::default();
            logging::init(&config.log_filter);
            tracing::warn!("{}; catalog disabled", e);
            config
        }
    };

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
