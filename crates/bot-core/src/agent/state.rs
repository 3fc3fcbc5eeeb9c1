use std::sync::{Arc, Mutex, MutexGuard};

use crate::game::object::Entity;
use crate::game::snapshot::Snapshot;

/// Shared holder for the agent's own entity and the latest snapshot.
///
/// The inbound dispatch task is the sole writer; the decision loop is the sole
/// reader. A single mutex guards both fields, so a getter returns either the
/// old complete value or the new complete value, never a mix. Snapshots are
/// stored behind `Arc` so readers keep a point-in-time view while the writer
/// replaces the current one.
///
/// Absence is the expected starting condition for both fields, not an error.
#[derive(Debug, Default)]
pub struct AgentState {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    bot: Option<Entity>,
    snapshot: Option<Arc<Snapshot>>,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the agent's own entity. Called once, on the registration ack.
    pub fn set_bot(&self, bot: Entity) {
        self.lock().bot = Some(bot);
    }

    pub fn bot(&self) -> Option<Entity> {
        self.lock().bot.clone()
    }

    /// Replaces the published snapshot wholesale. Last write wins.
    pub fn set_snapshot(&self, snapshot: Snapshot) {
        self.lock().snapshot = Some(Arc::new(snapshot));
    }

    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.lock().snapshot.clone()
    }

    /// Discards both fields. Called on disconnect.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.bot = None;
        inner.snapshot = None;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicked writer cannot leave a half-written Option in place, so
        // recover the guard instead of propagating poison.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
