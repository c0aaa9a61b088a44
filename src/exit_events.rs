use tauri::{AppHandle, Manager};

use crate::{Api, App};

/// Event-loop exit: cancel the session context so long-lived backend work
/// observes shutdown. Both handles share the same token, but cancelling
/// through each keeps the path correct if they ever diverge.
pub(crate) fn handle_exit(app_handle: &AppHandle) {
    if let Some(context) = app_handle.state::<App>().context() {
        context.cancel();
    }
    if let Some(context) = app_handle.state::<Api>().context() {
        context.cancel();
    }
    log::info!("desktop process shutting down");
}
