//! Graceful shutdown: close every window.

use super::core::SkiffApp;

impl SkiffApp {
    /// Close all remaining clients. Idempotent.
    pub fn shutdown(&mut self) {
        if self.session.registry().is_empty() {
            return;
        }
        tracing::info!(open = self.session.registry().len(), "closing remaining windows");
        self.session.close_all();
        self.windows.clear();
    }
}
