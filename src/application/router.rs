use super::host::HostSlot;
use crate::domain::billing::{BillingReply, ResponseCode, StoreId};
use crate::domain::outcome::{AcknowledgeOutcome, PurchaseOutcome};
use crate::domain::ports::NativeBridgeArc;

pub const MSG_FLOW_IN_PROGRESS: &str = "An In-app purchase flow is already in progress.";
pub const MSG_PURCHASE_FAILED: &str = "Unable to process the request. Try again later.";
pub const MSG_PENDING_ACKNOWLEDGED: &str = "All pending purchases have been acknowledged.";
pub const MSG_RESTORE_COMPLETED: &str = "Successfully restored all the purchases.";
pub const MSG_RESTORE_FAILED: &str = "Unable to restore purchases. Try again later.";
pub const MSG_RESTORING: &str = "Restoring purchases...";

/// Maps billing replies to outcomes and performs the associated
/// notification.
///
/// Per reply, the side effect is either one native call or one user-facing
/// message, never both. `Ok` always means a specific transaction to report
/// to the native layer; `RestoreCompleted` is a batch-boundary signal with
/// no product attached. The two are never conflated. Unrecognized codes fall
/// through to the failure branch so no reply is silently dropped.
pub struct PurchaseResultRouter {
    native: NativeBridgeArc,
    host: HostSlot,
}

impl PurchaseResultRouter {
    pub fn new(native: NativeBridgeArc, host: HostSlot) -> Self {
        Self { native, host }
    }

    /// Surfaces the contention message for a purchase rejected at the gate.
    pub fn reject_purchase(&self) -> PurchaseOutcome {
        tracing::debug!("purchase rejected, another flow is in progress");
        self.host.show_message(MSG_FLOW_IN_PROGRESS);
        PurchaseOutcome::FlowAlreadyActive
    }

    pub fn route_purchase(&self, store_id: &StoreId, reply: &BillingReply) -> PurchaseOutcome {
        match reply.response() {
            ResponseCode::Ok => {
                self.native.purchase_did_complete(store_id.as_str());
                PurchaseOutcome::Completed(store_id.clone())
            }
            ResponseCode::ItemAlreadyOwned => {
                self.native.purchase_did_complete(store_id.as_str());
                PurchaseOutcome::AlreadyOwned(store_id.clone())
            }
            _ => {
                tracing::warn!(code = reply.code, message = %reply.message, "billing flow failed");
                self.host.show_message(MSG_PURCHASE_FAILED);
                PurchaseOutcome::Failed
            }
        }
    }

    pub fn route_acknowledge(&self, reply: &BillingReply) -> AcknowledgeOutcome {
        match reply.response() {
            ResponseCode::Ok => {
                self.native.purchase_did_complete_restoring(&reply.message);
                AcknowledgeOutcome::Acknowledged(reply.message.clone())
            }
            ResponseCode::RestoreCompleted => {
                self.host.show_message(MSG_PENDING_ACKNOWLEDGED);
                AcknowledgeOutcome::RestoreBatchCompleted
            }
            _ => {
                tracing::debug!(code = reply.code, message = %reply.message, "acknowledge reply ignored");
                AcknowledgeOutcome::NoOp
            }
        }
    }

    /// Routes one restore reply. The terminal branches (batch-complete and
    /// failure) dismiss the progress indicator before showing their message.
    pub fn route_restore(&self, reply: &BillingReply) -> PurchaseOutcome {
        match reply.response() {
            ResponseCode::Ok => {
                self.native.purchase_did_complete_restoring(&reply.message);
                PurchaseOutcome::RestoreInProgress(reply.message.clone())
            }
            ResponseCode::RestoreCompleted => {
                self.host.dismiss_progress();
                self.host.show_message(MSG_RESTORE_COMPLETED);
                PurchaseOutcome::RestoreCompleted
            }
            _ => {
                tracing::warn!(code = reply.code, message = %reply.message, "restore failed");
                self.host.dismiss_progress();
                self.host.show_message(MSG_RESTORE_FAILED);
                PurchaseOutcome::Failed
            }
        }
    }
}
