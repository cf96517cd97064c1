use std::sync::atomic::{AtomicBool, Ordering};

/// Single-flight admission gate for purchase initiation.
///
/// At most one purchase flow may hold the gate at a time. The flag lives for
/// the process lifetime and is never persisted. Callers may run on a
/// multi-threaded runtime, so admission is an atomic compare-exchange rather
/// than a plain read-modify-write.
#[derive(Debug, Default)]
pub struct TransactionGate {
    in_progress: AtomicBool,
}

impl TransactionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically tests the flag: admits the caller and marks a flow in
    /// progress, or rejects without mutation. Total and non-blocking.
    pub fn try_acquire(&self) -> bool {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Unconditionally clears the flag. Must run exactly once per successful
    /// `try_acquire`, on every exit path of the flow, so the gate can never
    /// deadlock a future purchase attempt.
    pub fn release(&self) {
        self.in_progress.store(false, Ordering::Release);
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }
}
