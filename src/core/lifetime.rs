//! Guards against late results updating a screen that is already gone.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Active lifetime of one screen. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    generation: Arc<AtomicU64>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Taken before an operation starts; checked when it completes.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: Arc::clone(&self.generation),
            issued_at: self.generation.load(Ordering::SeqCst),
        }
    }

    /// The screen was dismissed: every outstanding ticket becomes stale.
    pub fn dismiss(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Arc<AtomicU64>,
    issued_at: u64,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.issued_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_invalidates_outstanding_tickets_only() {
        let view = ViewLifetime::new();
        let before = view.ticket();
        assert!(before.is_current());

        view.clone().dismiss();
        assert!(!before.is_current());
        assert!(view.ticket().is_current());
    }
}
