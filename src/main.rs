#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod backend_handles;
mod bridge_commands;
mod exit_events;
mod logging;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod session_context;
mod startup_activation;

pub(crate) use app_constants::*;
pub(crate) use app_types::{ApiSessionState, AppRuntimeInfo, QuitState};
pub(crate) use backend_handles::{Api, App};
pub(crate) use session_context::SessionContext;

fn main() {
    app_runtime::run();
}
