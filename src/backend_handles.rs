use std::sync::Mutex;

use crate::SessionContext;

/// General application handle exposed to the frontend. The session
/// context is injected exactly once by the startup hook; every method
/// that needs a live session goes through [`App::context`].
#[derive(Debug, Default)]
pub(crate) struct App {
    context: Mutex<Option<SessionContext>>,
}

/// API handle exposed to the frontend alongside [`App`].
#[derive(Debug, Default)]
pub(crate) struct Api {
    context: Mutex<Option<SessionContext>>,
}

fn activate_slot(
    slot: &Mutex<Option<SessionContext>>,
    context: SessionContext,
    handle_name: &str,
) -> Result<(), String> {
    let mut guard = slot
        .lock()
        .map_err(|_| format!("{handle_name} context lock poisoned"))?;
    if guard.is_some() {
        return Err(format!("{handle_name} handle is already activated"));
    }
    *guard = Some(context);
    Ok(())
}

fn slot_context(slot: &Mutex<Option<SessionContext>>) -> Option<SessionContext> {
    slot.lock().ok().and_then(|guard| guard.clone())
}

impl App {
    pub(crate) fn activate(&self, context: SessionContext) -> Result<(), String> {
        activate_slot(&self.context, context, "App")
    }

    pub(crate) fn context(&self) -> Option<SessionContext> {
        slot_context(&self.context)
    }

    pub(crate) fn runtime_info(&self, version: &str) -> Result<crate::AppRuntimeInfo, String> {
        let context = self
            .context()
            .ok_or_else(|| "App handle is not activated yet".to_string())?;
        Ok(crate::AppRuntimeInfo {
            title: crate::APP_TITLE.to_string(),
            version: version.to_string(),
            cancelled: context.is_cancelled(),
        })
    }
}

impl Api {
    pub(crate) fn activate(&self, context: SessionContext) -> Result<(), String> {
        activate_slot(&self.context, context, "Api")
    }

    pub(crate) fn context(&self) -> Option<SessionContext> {
        slot_context(&self.context)
    }

    pub(crate) fn session_state(&self) -> crate::ApiSessionState {
        match self.context() {
            Some(context) => crate::ApiSessionState {
                activated: true,
                cancelled: context.is_cancelled(),
            },
            None => crate::ApiSessionState {
                activated: false,
                cancelled: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Api, App};
    use crate::SessionContext;

    #[test]
    fn app_activation_succeeds_once_and_rejects_reactivation() {
        let app = App::default();
        assert!(app.activate(SessionContext::new()).is_ok());
        assert!(app.activate(SessionContext::new()).is_err());
    }

    #[test]
    fn api_activation_succeeds_once_and_rejects_reactivation() {
        let api = Api::default();
        assert!(api.activate(SessionContext::new()).is_ok());
        assert!(api.activate(SessionContext::new()).is_err());
    }

    #[test]
    fn runtime_info_reports_not_activated_before_startup() {
        let app = App::default();
        let error = app.runtime_info("0.1.0").unwrap_err();
        assert!(error.contains("not activated"));
    }

    #[test]
    fn runtime_info_reports_title_and_version_after_activation() {
        let app = App::default();
        app.activate(SessionContext::new()).unwrap();

        let info = app.runtime_info("0.1.0").unwrap();
        assert_eq!(info.title, crate::APP_TITLE);
        assert_eq!(info.version, "0.1.0");
        assert!(!info.cancelled);
    }

    #[test]
    fn session_state_tracks_activation_and_cancellation() {
        let api = Api::default();
        assert!(!api.session_state().activated);

        let context = SessionContext::new();
        api.activate(context.clone()).unwrap();
        assert!(api.session_state().activated);
        assert!(!api.session_state().cancelled);

        context.cancel();
        assert!(api.session_state().cancelled);
    }
}
