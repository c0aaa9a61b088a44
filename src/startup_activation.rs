use crate::{Api, App, SessionContext};

/// Startup hook body: inject the session context into both backend
/// handles. Runs inside the framework's setup callback, which fires once
/// before any frontend invoke is dispatched, so every bridge command sees
/// activated handles.
pub(crate) fn activate_backend_handles(
    app: &App,
    api: &Api,
    context: SessionContext,
) -> Result<(), String> {
    app.activate(context.clone())?;
    api.activate(context)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::activate_backend_handles;
    use crate::{Api, App, SessionContext};

    #[test]
    fn activation_wires_the_same_context_into_both_handles() {
        let app = App::default();
        let api = Api::default();
        let context = SessionContext::new();

        activate_backend_handles(&app, &api, context.clone()).expect("startup activation");

        context.cancel();
        assert!(app.context().expect("app context").is_cancelled());
        assert!(api.context().expect("api context").is_cancelled());
    }

    #[test]
    fn activation_happens_at_most_once_per_process() {
        let app = App::default();
        let api = Api::default();

        activate_backend_handles(&app, &api, SessionContext::new()).expect("first activation");
        assert!(activate_backend_handles(&app, &api, SessionContext::new()).is_err());
    }

    #[test]
    fn bridge_dispatch_before_activation_reports_inactive_handles() {
        let app = App::default();
        let api = Api::default();

        // Simulated frontend dispatch ahead of the startup hook.
        assert!(app.runtime_info("0.1.0").is_err());
        assert!(!api.session_state().activated);

        activate_backend_handles(&app, &api, SessionContext::new()).expect("startup activation");

        assert!(app.runtime_info("0.1.0").is_ok());
        assert!(api.session_state().activated);
    }
}
