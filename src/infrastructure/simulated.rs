use crate::domain::billing::{BillingReply, ResponseCode, StoreId};
use crate::domain::ports::BillingDataSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A scripted billing source for session replay and tests.
///
/// Replies are queued ahead of time. `launch_billing_flow` consumes one
/// reply; the batch operations drain everything queued, in order. An empty
/// queue yields an `Error` reply rather than hanging, mirroring the error
/// funnel of the platform client.
///
/// `Clone` shares the underlying queue, so a caller can keep a handle for
/// queueing while the coordinator owns the boxed port.
#[derive(Clone, Default)]
pub struct ScriptedBillingSource {
    replies: Arc<Mutex<VecDeque<BillingReply>>>,
}

impl ScriptedBillingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn queue_reply(&self, code: i32, message: impl Into<String>) {
        self.replies
            .lock()
            .await
            .push_back(BillingReply::new(code, message));
    }

    pub async fn queued(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl BillingDataSource for ScriptedBillingSource {
    async fn launch_billing_flow(&self, store_id: &StoreId, _consumable: bool) -> BillingReply {
        self.replies.lock().await.pop_front().unwrap_or_else(|| {
            BillingReply::new(
                ResponseCode::Error.raw(),
                format!("No scripted reply for {store_id}"),
            )
        })
    }

    async fn acknowledge_pending_purchases(&self) -> Vec<BillingReply> {
        self.replies.lock().await.drain(..).collect()
    }

    async fn restore_previous_iaps(&self) -> Vec<BillingReply> {
        self.replies.lock().await.drain(..).collect()
    }
}
