//! Shared, lock-guarded sandbox session.

use std::sync::{Arc, Mutex, MutexGuard};

use sandbox_core::Sandbox;

/// Handle to the process-wide sandbox session.
///
/// Every request holds the lock for the whole operation, so approvals are
/// applied one at a time and each snapshot is captured against the document
/// it precedes. Nothing is persisted; state lives for the life of the process.
#[derive(Clone, Default)]
pub struct Store {
    sandbox: Arc<Mutex<Sandbox>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sandbox(sandbox: Sandbox) -> Self {
        Self {
            sandbox: Arc::new(Mutex::new(sandbox)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Sandbox> {
        self.sandbox.lock().expect("sandbox lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_session() {
        let store = Store::new();
        let other = store.clone();
        store.lock().submit("add about");
        assert!(other.lock().pending().is_some());
    }
}
