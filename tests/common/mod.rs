use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use storeflow::application::coordinator::PurchaseCoordinator;
use storeflow::application::host::HostSlot;
use storeflow::domain::billing::{BillingReply, StoreId};
use storeflow::domain::ports::{BillingDataSource, BillingSourceBox, NativeBridge, UiHost};
use tokio::sync::{Notify, oneshot};

pub fn sku(raw: &str) -> StoreId {
    StoreId::new(raw).unwrap()
}

/// Records every native notification for assertion.
#[derive(Default)]
pub struct RecordingBridge {
    completed: Mutex<Vec<String>>,
    restoring: Mutex<Vec<String>>,
}

impl RecordingBridge {
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().clone()
    }

    pub fn restoring(&self) -> Vec<String> {
        self.restoring.lock().clone()
    }
}

impl NativeBridge for RecordingBridge {
    fn purchase_did_complete(&self, product_id: &str) {
        self.completed.lock().push(product_id.to_string());
    }

    fn purchase_did_complete_restoring(&self, message: &str) {
        self.restoring.lock().push(message.to_string());
    }
}

/// Records messages and tracks the progress indicator.
#[derive(Default)]
pub struct RecordingHost {
    messages: Mutex<Vec<String>>,
    progress_active: Mutex<bool>,
    progress_ever_shown: Mutex<bool>,
}

impl RecordingHost {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn progress_showing(&self) -> bool {
        *self.progress_active.lock()
    }

    pub fn progress_was_shown(&self) -> bool {
        *self.progress_ever_shown.lock()
    }
}

impl UiHost for RecordingHost {
    fn show_message(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }

    fn show_progress(&self, _message: &str) {
        *self.progress_active.lock() = true;
        *self.progress_ever_shown.lock() = true;
    }

    fn dismiss_progress(&self) {
        *self.progress_active.lock() = false;
    }
}

/// A billing source whose purchase replies are resolved manually, so a test
/// can hold a flow open across other calls.
#[derive(Clone, Default)]
pub struct ManualBillingSource {
    inner: Arc<ManualInner>,
}

#[derive(Default)]
struct ManualInner {
    launches: Mutex<Vec<(String, oneshot::Sender<BillingReply>)>>,
    launched: Notify,
}

impl ManualBillingSource {
    pub fn launch_count(&self) -> usize {
        self.inner.launches.lock().len()
    }

    /// Waits until the next `launch_billing_flow` call has registered.
    pub async fn wait_for_launch(&self) {
        self.inner.launched.notified().await;
    }

    pub fn resolve_next(&self, code: i32, message: &str) {
        let (_store_id, tx) = self.inner.launches.lock().remove(0);
        let _ = tx.send(BillingReply::new(code, message));
    }
}

#[async_trait]
impl BillingDataSource for ManualBillingSource {
    async fn launch_billing_flow(&self, store_id: &StoreId, _consumable: bool) -> BillingReply {
        let (tx, rx) = oneshot::channel();
        self.inner
            .launches
            .lock()
            .push((store_id.to_string(), tx));
        self.inner.launched.notify_one();
        rx.await
            .unwrap_or_else(|_| BillingReply::new(6, "billing source dropped"))
    }

    async fn acknowledge_pending_purchases(&self) -> Vec<BillingReply> {
        Vec::new()
    }

    async fn restore_previous_iaps(&self) -> Vec<BillingReply> {
        Vec::new()
    }
}

pub struct Harness {
    pub coordinator: Arc<PurchaseCoordinator>,
    pub bridge: Arc<RecordingBridge>,
    pub host: Arc<RecordingHost>,
    pub slot: HostSlot,
}

/// Wires a coordinator to recording doubles with the host attached.
pub fn harness(billing: BillingSourceBox) -> Harness {
    let bridge = Arc::new(RecordingBridge::default());
    let host = Arc::new(RecordingHost::default());
    let slot = HostSlot::new();
    slot.attach(host.clone());

    let coordinator = Arc::new(PurchaseCoordinator::new(
        billing,
        bridge.clone(),
        slot.clone(),
    ));

    Harness {
        coordinator,
        bridge,
        host,
        slot,
    }
}
