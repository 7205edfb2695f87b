mod app;
mod config;
mod core;
mod dnd;
mod features;
mod logging;
mod pages;

use app::*;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = BoardConfig::load();
    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default board config");
    }
    tracing::info!(?config, "mounting board");

    mount_to_body(move || view! { <App config=config /> })
}
