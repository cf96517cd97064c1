use super::gate::TransactionGate;
use super::host::HostSlot;
use super::router::{MSG_RESTORING, PurchaseResultRouter};
use crate::domain::billing::StoreId;
use crate::domain::outcome::{AcknowledgeOutcome, PurchaseOutcome};
use crate::domain::ports::{BillingSourceBox, NativeBridgeArc};

/// Orchestrates purchase, acknowledge, and restore flows against the
/// billing data source.
///
/// Purchases are single-flight: between a successful gate acquisition and
/// the routing of that flow's reply, every other `purchase` call is rejected
/// without reaching the billing source. The gate is released on every
/// outcome branch. Acknowledge and restore do not consult the gate and may
/// interleave freely with an in-flight purchase; they act on ledger state,
/// not on the gate.
///
/// One instance is constructed at application start and shared by reference;
/// there is no process-wide singleton.
pub struct PurchaseCoordinator {
    gate: TransactionGate,
    router: PurchaseResultRouter,
    billing: BillingSourceBox,
    host: HostSlot,
}

impl PurchaseCoordinator {
    pub fn new(billing: BillingSourceBox, native: NativeBridgeArc, host: HostSlot) -> Self {
        Self {
            gate: TransactionGate::new(),
            router: PurchaseResultRouter::new(native, host.clone()),
            billing,
            host,
        }
    }

    /// Runs one purchase flow to completion.
    ///
    /// If another flow holds the gate, the request is rejected immediately
    /// with [`PurchaseOutcome::FlowAlreadyActive`] and the billing source is
    /// not called. Otherwise the flow resolves through the billing source,
    /// the reply is routed, and the gate is released unconditionally.
    ///
    /// A billing future that never resolves leaves the gate held; there is
    /// deliberately no timeout (see DESIGN.md).
    pub async fn purchase(&self, store_id: StoreId, consumable: bool) -> PurchaseOutcome {
        if !self.gate.try_acquire() {
            return self.router.reject_purchase();
        }

        tracing::debug!(product = %store_id, consumable, "launching billing flow");
        let reply = self.billing.launch_billing_flow(&store_id, consumable).await;

        let outcome = self.router.route_purchase(&store_id, &reply);
        self.gate.release();
        outcome
    }

    /// Finalizes purchases still pending server-side acknowledgement.
    ///
    /// Independent and idempotent from the caller's perspective; intended to
    /// run on every foreground-resume.
    pub async fn acknowledge_pending_purchases(&self) -> Vec<AcknowledgeOutcome> {
        let replies = self.billing.acknowledge_pending_purchases().await;
        tracing::debug!(replies = replies.len(), "acknowledge batch resolved");
        replies
            .iter()
            .map(|reply| self.router.route_acknowledge(reply))
            .collect()
    }

    /// Re-queries previously granted entitlements, reporting each one to the
    /// native layer.
    ///
    /// A blocking progress indicator is shown for the duration of the call
    /// and is guaranteed to be dismissed by the time it returns, whatever
    /// the batch resolved to.
    pub async fn restore_purchases(&self) -> Vec<PurchaseOutcome> {
        self.host.show_progress(MSG_RESTORING);

        let replies = self.billing.restore_previous_iaps().await;
        tracing::debug!(replies = replies.len(), "restore batch resolved");
        let outcomes: Vec<PurchaseOutcome> = replies
            .iter()
            .map(|reply| self.router.route_restore(reply))
            .collect();

        // The terminal reply dismisses the indicator itself, but a batch
        // with no terminal reply must not leave it showing.
        let terminal_seen = outcomes
            .iter()
            .any(|o| matches!(o, PurchaseOutcome::RestoreCompleted | PurchaseOutcome::Failed));
        if !terminal_seen {
            self.host.dismiss_progress();
        }
        outcomes
    }

    pub fn is_purchase_in_flight(&self) -> bool {
        self.gate.is_in_progress()
    }
}
