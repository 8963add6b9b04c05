#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod document_root;
mod launcher_config;
mod lifecycle;
mod logging;
mod main_window;
mod runtime_paths;
mod runtime_switches;
mod window_registry;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use app_types::ShellState;
pub(crate) use launcher_config::LauncherConfig;
pub(crate) use runtime_switches::RuntimeSwitches;
pub(crate) use window_registry::WindowRegistry;

fn main() {
    app_runtime::run();
}
