use super::coordinator::PurchaseCoordinator;
use crate::domain::consent::{SdkConsentInfo, has_seen_consent_for_all_sdks};
use crate::domain::outcome::AcknowledgeOutcome;
use crate::domain::ports::PreferenceStoreBox;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// What the hosting surface should do after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAction {
    /// At least one bundled SDK has no recorded consent decision; the
    /// consent screen must run before the game starts.
    LaunchConsentScreen,
    Proceed,
}

/// Lifecycle facade binding the purchase coordinator to the hosting
/// application surface.
///
/// The store bridge becomes available only after the native layer has
/// finished booting; resume hooks delivered before that point must not
/// touch the billing source.
pub struct AppShell {
    coordinator: Arc<PurchaseCoordinator>,
    prefs: PreferenceStoreBox,
    consent_infos: Vec<SdkConsentInfo>,
    store_ready: AtomicBool,
}

impl AppShell {
    pub fn new(
        coordinator: Arc<PurchaseCoordinator>,
        prefs: PreferenceStoreBox,
        consent_infos: Vec<SdkConsentInfo>,
    ) -> Self {
        Self {
            coordinator,
            prefs,
            consent_infos,
            store_ready: AtomicBool::new(false),
        }
    }

    /// Creation hook: gates the game behind the consent screen until every
    /// bundled SDK has a recorded consent decision.
    pub fn on_create(&self) -> CreateAction {
        if has_seen_consent_for_all_sdks(self.prefs.as_ref(), &self.consent_infos) {
            CreateAction::Proceed
        } else {
            tracing::info!("consent missing for at least one SDK");
            CreateAction::LaunchConsentScreen
        }
    }

    /// Called once the native layer has finished booting and the store
    /// bridge is wired up.
    pub fn on_native_init(&self) {
        self.store_ready.store(true, Ordering::Release);
    }

    /// Foreground-resume hook. Safe to call on every resume: acknowledging
    /// an already finalized purchase is a billing-source no-op.
    pub async fn on_resume(&self) -> Vec<AcknowledgeOutcome> {
        if !self.store_ready.load(Ordering::Acquire) {
            tracing::debug!("resume before native init, skipping acknowledge");
            return Vec::new();
        }
        self.coordinator.acknowledge_pending_purchases().await
    }

    pub fn coordinator(&self) -> &Arc<PurchaseCoordinator> {
        &self.coordinator
    }
}
