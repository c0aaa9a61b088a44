use tauri::{AppHandle, Manager};

use crate::{
    app_types::BridgeResult, Api, ApiSessionState, App, AppRuntimeInfo,
};

#[tauri::command]
pub(crate) fn app_runtime_info(app_handle: AppHandle) -> BridgeResult<AppRuntimeInfo> {
    let version = app_handle.package_info().version.to_string();
    let app = app_handle.state::<App>();
    match app.runtime_info(&version) {
        Ok(info) => BridgeResult::ok(info),
        Err(error) => BridgeResult::err(error),
    }
}

#[tauri::command]
pub(crate) fn api_session_state(app_handle: AppHandle) -> BridgeResult<ApiSessionState> {
    let api = app_handle.state::<Api>();
    BridgeResult::ok(api.session_state())
}
