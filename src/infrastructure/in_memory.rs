use crate::domain::ports::PreferenceStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A thread-safe in-memory preference store.
///
/// Stands in for the platform's default shared preferences; used for
/// consent bookkeeping in tests and in the replay binary. `Clone` shares
/// the underlying map.
#[derive(Default, Clone)]
pub struct InMemoryPreferences {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
    }
}
