use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Liveness of an activated view.
///
/// Each activation gets a new generation; results of async calls carry the
/// ticket they were started under and are applied only while that ticket is
/// still current. Deactivating or re-activating the view invalidates every
/// outstanding ticket.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    inner: Arc<ScopeState>,
}

#[derive(Debug, Default)]
struct ScopeState {
    active: AtomicBool,
    generation: AtomicU64,
}

/// Proof that a call was started within a given activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeTicket(u64);

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation, invalidating older tickets
    pub fn open(&self) -> ScopeTicket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.active.store(true, Ordering::SeqCst);
        ScopeTicket(generation)
    }

    /// Tear the view down
    pub fn close(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.load(Ordering::SeqCst)
    }

    /// Ticket for the current activation, if the view is active
    pub fn ticket(&self) -> Option<ScopeTicket> {
        if self.is_active() {
            Some(ScopeTicket(self.inner.generation.load(Ordering::SeqCst)))
        } else {
            None
        }
    }

    /// Whether a result started under `ticket` may still be applied
    pub fn is_current(&self, ticket: ScopeTicket) -> bool {
        self.is_active() && self.inner.generation.load(Ordering::SeqCst) == ticket.0
    }
}
