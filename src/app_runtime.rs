use tauri::{Manager, RunEvent};
use tauri_plugin_log::{Target, TargetKind};

use crate::{
    exit_events, logging, menu_handler, menu_setup, startup_activation, Api, App, QuitState,
    SessionContext, LOG_FILE_BASENAME, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    // Logging is a hard precondition for the rest of the shell; a
    // filesystem failure here aborts before the event loop starts.
    let home_dir = logging::resolve_home_dir().expect("cannot resolve the user home directory");
    let log_file = logging::log_file_path(&home_dir);
    logging::ensure_log_file(&log_file).expect("failed to prepare the log file");

    let build_result = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([Target::new(TargetKind::Folder {
                    path: logging::log_dir(&home_dir),
                    file_name: Some(LOG_FILE_BASENAME.to_string()),
                })])
                .level(logging::log_level())
                .build(),
        )
        .manage(App::default())
        .manage(Api::default())
        .manage(QuitState::default())
        .menu(menu_setup::build_app_menu)
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref())
        })
        .invoke_handler(tauri::generate_handler![
            crate::bridge_commands::app_runtime_info,
            crate::bridge_commands::api_session_state,
        ])
        .setup(move |app| {
            let app_handle = app.handle();
            let app_state = app_handle.state::<App>();
            let api_state = app_handle.state::<Api>();
            if let Err(error) = startup_activation::activate_backend_handles(
                &app_state,
                &api_state,
                SessionContext::new(),
            ) {
                log::error!("startup activation failed: {error}");
            }

            if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_none() {
                log::error!("main window is unavailable at startup");
            }
            log::info!("desktop shell ready, log file at {}", log_file.display());
            Ok(())
        })
        .build(tauri::generate_context!());

    let app = match build_result {
        Ok(app) => app,
        Err(error) => {
            // Startup failure is reported on stdout and the process falls
            // through to a normal exit, matching the shell's documented
            // behavior.
            println!("Error: {error}");
            return;
        }
    };

    app.run(|app_handle, event| {
        if let RunEvent::Exit = event {
            exit_events::handle_exit(app_handle);
        }
    });
}
