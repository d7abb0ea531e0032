#![allow(warnings)]
//! Recipe Book Frontend Entry Point

mod admin;
mod api;
mod app;
mod components;
mod config;
mod context;
mod debounce;
mod dialog;
mod error;
mod models;
mod notify;
mod render;
mod search;
mod speech;
mod store;
mod theme;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let overrides = config::read_meta();
    let (config, malformed) = match ClientConfig::from_meta(overrides.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };

    match console_logger::init(config.log_filter(), console_logger::DEFAULT_CAPACITY) {
        Ok(logger) => {
            // Panic message first, then what led up to it
            std::panic::set_hook(Box::new(move |info| {
                console_error_panic_hook::hook(info);
                let report = logger.report("Recent log records");
                web_sys::console::error_1(&report.into());
            }));
        }
        Err(_) => web_sys::console::warn_1(&"logger already installed".into()),
    }
    if let Some(err) = malformed {
        log::warn!("[CONFIG] Ignoring malformed <meta name=\"{}\">: {}", config::CONFIG_META_NAME, err);
    }
    log::info!("[APP] Starting, api base {}", config.api_base());

    speech::prime_voices();
    mount_to_body(move || view! { <App config=config /> });
}
