//! ProjectDesk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod fetcher;
mod filter;
mod forms;
mod models;
mod pages;
mod session;
mod store;
mod view_state;

use std::sync::Arc;

use api::{ApiClient, HttpTransport};
use app::App;
use config::AppConfig;
use leptos::prelude::*;
use session::Session;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    console_logger::init(env!("CARGO_CRATE_NAME"), config.log_level);
    log::info!("starting against {}", config.api_base);

    let api = ApiClient::new(config.api_base.clone(), Session::browser(), Arc::new(HttpTransport::new()));
    mount_to_body(move || view! { <App api=api config=config/> });
}
