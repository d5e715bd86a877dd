//! Consumable resource ledger
//!
//! Spares live wherever the host keeps them: a vehicle-local
//! container, the operator's own carry, or anything else that can
//! answer a balance query and settle a debit. The repair economy talks
//! to all of them through the same trait.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical resource name for repair consumables
pub const SPARE_PARTS: &str = "SpareParts";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("not enough {resource}: requested {requested}, available {available}")]
    Insufficient {
        resource: String,
        requested: f64,
        available: f64,
    },
}

/// Balance store for consumable resources
pub trait Ledger {
    /// Current balance of a resource (0.0 when unknown)
    fn available(&self, resource: &str) -> f64;

    /// Withdraw an amount; fails without side effects when the
    /// balance is short
    fn debit(&mut self, resource: &str, amount: f64) -> Result<(), LedgerError>;
}

/// Simple map-backed ledger, useful for operator-carried spares and
/// for tests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarriedStore {
    balances: BTreeMap<String, f64>,
}

impl CarriedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor holding one resource
    pub fn with(resource: &str, amount: f64) -> Self {
        let mut store = Self::new();
        store.credit(resource, amount);
        store
    }

    pub fn credit(&mut self, resource: &str, amount: f64) {
        *self.balances.entry(resource.to_string()).or_insert(0.0) += amount;
    }
}

impl Ledger for CarriedStore {
    fn available(&self, resource: &str) -> f64 {
        self.balances.get(resource).copied().unwrap_or(0.0)
    }

    fn debit(&mut self, resource: &str, amount: f64) -> Result<(), LedgerError> {
        let balance = self.available(resource);
        if balance < amount {
            return Err(LedgerError::Insufficient {
                resource: resource.to_string(),
                requested: amount,
                available: balance,
            });
        }
        self.balances.insert(resource.to_string(), balance - amount);
        Ok(())
    }
}
