use super::ports::PreferenceStore;

/// Consent metadata for one bundled third-party SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConsentInfo {
    pub sdk_id: String,
    pub display_name: String,
    pub privacy_policy_url: String,
}

impl SdkConsentInfo {
    pub fn new(
        sdk_id: impl Into<String>,
        display_name: impl Into<String>,
        privacy_policy_url: impl Into<String>,
    ) -> Self {
        Self {
            sdk_id: sdk_id.into(),
            display_name: display_name.into(),
            privacy_policy_url: privacy_policy_url.into(),
        }
    }
}

/// The preference key under which consent for an SDK is recorded.
pub fn consent_key(sdk_id: &str) -> String {
    format!("{sdk_id}_CONSENT_KEY")
}

/// SDKs whose consent must be collected before the game starts.
pub fn default_sdk_consent_infos() -> Vec<SdkConsentInfo> {
    vec![SdkConsentInfo::new(
        "admob",
        "Admob",
        "https://policies.google.com/technologies/partner-sites",
    )]
}

/// True iff a consent decision has been recorded for every listed SDK.
/// Presence of the key is what counts, not its value.
pub fn has_seen_consent_for_all_sdks(
    prefs: &dyn PreferenceStore,
    infos: &[SdkConsentInfo],
) -> bool {
    infos
        .iter()
        .all(|info| prefs.contains(&consent_key(&info.sdk_id)))
}
