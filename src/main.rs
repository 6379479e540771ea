#![allow(warnings)]
//! Question List Entry Point

mod models;
mod annotation;
mod caret;
mod navigation;
mod reorder;
mod focus;
mod widget;
mod store;
mod editor;
mod storage;
mod config;
mod error;
mod logging;
mod context;
mod components;
mod app;

use app::App;
use config::EditorConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = EditorConfig::from_window();
    if let Err(e) = logging::init(&config) {
        web_sys::console::warn_1(&format!("[APP] {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
