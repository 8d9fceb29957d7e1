//! In-memory alert-state store for tests and dry runs.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::Asset;
use crate::error::StateError;
use crate::port::AlertStateStore;

/// Keeps the flags in a map; nothing survives the process.
#[derive(Default)]
pub struct MemoryAlertStore {
    flags: Mutex<HashMap<Asset, bool>>,
}

impl MemoryAlertStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-set a flag, for tests that start mid-cycle.
    pub fn seed(&self, asset: Asset, alerted: bool) {
        self.flags.lock().insert(asset, alerted);
    }
}

impl AlertStateStore for MemoryAlertStore {
    fn get(&self, asset: Asset) -> Result<bool, StateError> {
        Ok(self.flags.lock().get(&asset).copied().unwrap_or(false))
    }

    fn set(&self, asset: Asset, alerted: bool) -> Result<(), StateError> {
        self.flags.lock().insert(asset, alerted);
        Ok(())
    }
}
