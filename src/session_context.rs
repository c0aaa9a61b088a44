use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Cancellable token for the lifetime of the running session. Cloned into
/// every backend handle at startup; cancelled once when the event loop
/// shuts down.
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionContext {
    cancelled: Arc<AtomicBool>,
}

impl SessionContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionContext;

    #[test]
    fn session_context_starts_uncancelled() {
        assert!(!SessionContext::new().is_cancelled());
    }

    #[test]
    fn cancellation_is_visible_from_every_clone() {
        let context = SessionContext::new();
        let clone = context.clone();

        context.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let context = SessionContext::new();
        context.cancel();
        context.cancel();
        assert!(context.is_cancelled());
    }
}
