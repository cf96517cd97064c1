use super::billing::{BillingReply, StoreId};
use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous gateway to the platform purchase ledger.
///
/// Each operation resolves to the sequence of callback invocations the
/// platform client would have delivered. `launch_billing_flow` resolves to
/// exactly one reply; the batch operations resolve to zero or more
/// per-product replies followed by a terminal batch signal. None of these
/// operations can be cancelled once started.
#[async_trait]
pub trait BillingDataSource: Send + Sync {
    /// Starts a billing flow for one product.
    async fn launch_billing_flow(&self, store_id: &StoreId, consumable: bool) -> BillingReply;

    /// Acknowledges purchases still pending server-side finalization.
    /// Re-acknowledging an already finalized purchase is a no-op for the
    /// ledger, so callers may invoke this on every foreground-resume.
    async fn acknowledge_pending_purchases(&self) -> Vec<BillingReply>;

    /// Re-queries previously granted, non-consumed entitlements.
    async fn restore_previous_iaps(&self) -> Vec<BillingReply>;
}

/// Game-engine-side receiver of purchase notifications.
///
/// Calls are synchronous and fire-and-forget, issued at most once per
/// logical transaction.
pub trait NativeBridge: Send + Sync {
    fn purchase_did_complete(&self, product_id: &str);
    fn purchase_did_complete_restoring(&self, message: &str);
}

/// The UI surface of the hosting application: short transient messages and
/// a blocking progress indicator.
pub trait UiHost: Send + Sync {
    fn show_message(&self, message: &str);
    fn show_progress(&self, message: &str);
    fn dismiss_progress(&self);
}

/// Key-value preference storage, used for consent bookkeeping.
pub trait PreferenceStore: Send + Sync {
    fn contains(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
}

pub type BillingSourceBox = Box<dyn BillingDataSource>;
pub type NativeBridgeArc = Arc<dyn NativeBridge>;
pub type UiHostArc = Arc<dyn UiHost>;
pub type PreferenceStoreBox = Box<dyn PreferenceStore>;
