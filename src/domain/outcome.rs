use super::billing::StoreId;

/// Result of routing one purchase-flow or restore-flow billing reply.
///
/// Derived once per reply, never persisted. `Completed` and `AlreadyOwned`
/// are routed identically (the native layer is notified either way), but the
/// distinction is kept for callers that care how the entitlement was
/// obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// A specific transaction completed; the native layer was notified.
    Completed(StoreId),
    /// The product was already owned; treated as a completion.
    AlreadyOwned(StoreId),
    /// One previously granted entitlement was reported mid-restore.
    RestoreInProgress(String),
    /// The restore batch finished; no specific product to report.
    RestoreCompleted,
    /// The billing source reported a failure; the user was told to retry.
    Failed,
    /// A purchase flow was already active; the request was rejected.
    FlowAlreadyActive,
}

/// Result of routing one acknowledge-flow billing reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcknowledgeOutcome {
    /// One pending purchase was finalized; the native layer was notified.
    Acknowledged(String),
    /// The acknowledge batch finished.
    RestoreBatchCompleted,
    /// The reply carried a code the acknowledge path does not act on.
    NoOp,
}
