#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod booth_config;
mod config_path;
mod devtools_bridge;
mod display_sleep;
mod escape_shortcut;
mod kiosk_host;
mod kiosk_startup;
mod lifecycle;
mod lifecycle_events;
mod logging;
mod runtime_paths;
mod window_actions;
mod window_settings;

pub(crate) use app_constants::*;
pub(crate) use app_types::KioskState;
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
