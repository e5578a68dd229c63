//! Shopping List Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod filter;
mod context;
mod store;
mod components;
mod screens;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    logging::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_level());
    log::info!("[APP] starting, {} profile fields", config.profile.fields.len());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
