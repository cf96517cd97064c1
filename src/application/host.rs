use crate::domain::ports::{UiHost, UiHostArc};
use parking_lot::RwLock;
use std::sync::Arc;

/// The current UI host, if any.
///
/// The hosting surface can go away at any time (backgrounded, destroyed), so
/// every dispatch checks for presence and silently no-ops when the slot is
/// empty. Clones share the same slot.
#[derive(Clone, Default)]
pub struct HostSlot {
    inner: Arc<RwLock<Option<UiHostArc>>>,
}

impl HostSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, host: UiHostArc) {
        *self.inner.write() = Some(host);
    }

    pub fn detach(&self) {
        *self.inner.write() = None;
    }

    pub fn is_attached(&self) -> bool {
        self.inner.read().is_some()
    }

    fn current(&self) -> Option<UiHostArc> {
        self.inner.read().clone()
    }

    pub fn show_message(&self, message: &str) {
        self.dispatch(|host| host.show_message(message));
    }

    pub fn show_progress(&self, message: &str) {
        self.dispatch(|host| host.show_progress(message));
    }

    pub fn dismiss_progress(&self) {
        self.dispatch(|host| host.dismiss_progress());
    }

    fn dispatch(&self, f: impl FnOnce(&dyn UiHost)) {
        match self.current() {
            Some(host) => f(host.as_ref()),
            None => tracing::debug!("no UI host attached, dropping dispatch"),
        }
    }
}
