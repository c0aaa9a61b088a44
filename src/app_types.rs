use std::sync::atomic::{AtomicBool, Ordering};

/// Once-guard for the quit path: the first request wins, every later
/// request is a no-op.
#[derive(Debug, Default)]
pub(crate) struct QuitState {
    requested: AtomicBool,
}

impl QuitState {
    pub(crate) fn request(&self) -> bool {
        self.requested
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppRuntimeInfo {
    pub(crate) title: String,
    pub(crate) version: String,
    pub(crate) cancelled: bool,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiSessionState {
    pub(crate) activated: bool,
    pub(crate) cancelled: bool,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult<T> {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
    #[serde(flatten)]
    pub(crate) value: Option<T>,
}

impl<T> BridgeResult<T> {
    pub(crate) fn ok(value: T) -> Self {
        Self {
            ok: true,
            reason: None,
            value: Some(value),
        }
    }

    pub(crate) fn err(reason: String) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
            value: None,
        }
    }
}
