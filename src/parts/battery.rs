//! Battery failure behavior
//!
//! A short circuit dumps the stored charge and locks the flow until
//! the battery is repaired. The charge store itself lives with the
//! part; a part without one cannot be tracked and faults at bind time.

use serde::{Deserialize, Serialize};

use crate::parts::AdapterFault;

/// Electric charge carried by the part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeStore {
    pub amount: f64,
    pub capacity: f64,
    pub flow_enabled: bool,
}

impl ChargeStore {
    pub fn full(capacity: f64) -> Self {
        Self {
            amount: capacity,
            capacity,
            flow_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battery {
    store: Option<ChargeStore>,
}

impl Battery {
    /// Bind to the part's charge store, if it has one
    pub fn new(store: Option<ChargeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Option<&ChargeStore> {
        self.store.as_ref()
    }

    pub fn validate(&self) -> Result<(), AdapterFault> {
        if self.store.is_some() {
            Ok(())
        } else {
            Err(AdapterFault::MissingChargeStore)
        }
    }

    pub fn apply_failure_effects(&mut self) {
        if let Some(store) = &mut self.store {
            store.amount = 0.0;
            store.flow_enabled = false;
        }
    }

    pub fn clear_failure_effects(&mut self) {
        if let Some(store) = &mut self.store {
            store.flow_enabled = true;
        }
    }
}
