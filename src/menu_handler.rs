use tauri::{AppHandle, Manager};

use crate::{menu_actions, App, QuitState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuitDecision {
    IgnoreBecauseAlreadyRequested,
    ProceedWithQuit,
}

fn decide_quit(already_granted: bool) -> QuitDecision {
    if already_granted {
        QuitDecision::ProceedWithQuit
    } else {
        QuitDecision::IgnoreBecauseAlreadyRequested
    }
}

pub(crate) fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match menu_actions::action_from_menu_id(menu_id) {
        Some(menu_actions::MenuAction::Quit) => {
            let quit_state = app_handle.state::<QuitState>();
            match decide_quit(quit_state.request()) {
                QuitDecision::IgnoreBecauseAlreadyRequested => {
                    log::debug!("duplicate quit request ignored");
                    return;
                }
                QuitDecision::ProceedWithQuit => {}
            }

            if let Some(context) = app_handle.state::<App>().context() {
                context.cancel();
            }
            log::info!("quit requested from menu, exiting desktop process");
            app_handle.exit(0);
        }
        None => {}
    }
}
