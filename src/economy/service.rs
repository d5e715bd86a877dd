//! Repair and maintenance transactions
//!
//! Both transactions are atomic: every gate is checked before the
//! ledger is touched, and the part state only changes after the debit
//! settles. A denial is a typed outcome for the caller, not an error.
//!
//! Maintenance consumes its full cost. Repair rolls a cost discount
//! against the operator's proficiency, debits the discounted amount
//! and reports the difference back as spares saved.

use rand::Rng;
use thiserror::Error;

use crate::core::config::EngineConfig;
use crate::economy::ledger::{Ledger, SPARE_PARTS};
use crate::economy::skills::{self, Operator};
use crate::engine::events::ReliabilityEvent;
use crate::engine::part::PartReliability;

/// Why a service transaction was refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceDenial {
    #[error("the part has not failed")]
    NotFailed,

    #[error("the part has already failed; repair it instead")]
    AlreadyFailed,

    #[error("the part is out of service for this session")]
    OutOfService,

    #[error("you need {needed} spares for this, only {available} on hand")]
    InsufficientSpares { needed: f64, available: f64 },

    #[error("{operator} has no idea how to service this")]
    Unqualified { operator: String },

    #[error("too hot to service right now ({temperature} degrees, limit {limit})")]
    TooHotToService { temperature: f64, limit: f64 },
}

/// Settled preventive maintenance
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceReceipt {
    pub cost_paid: f64,
}

/// Settled repair
#[derive(Debug, Clone, PartialEq)]
pub struct RepairReceipt {
    pub cost_paid: f64,
    /// Spares kept in the pocket thanks to the discount roll
    pub saved: f64,
    /// Repair notification for the host's message sink
    pub event: ReliabilityEvent,
}

/// Preventive maintenance: consume spares to discount accumulated age
pub fn maintain(
    part: &mut PartReliability,
    operator: &Operator,
    ledger: &mut dyn Ledger,
) -> Result<MaintenanceReceipt, ServiceDenial> {
    if !part.is_enabled() || !part.state().initialized {
        return Err(ServiceDenial::OutOfService);
    }
    if part.has_failed() {
        return Err(ServiceDenial::AlreadyFailed);
    }
    if !skills::meets_all(part.requirements(), &operator.skills) {
        return Err(ServiceDenial::Unqualified {
            operator: operator.name.clone(),
        });
    }

    let cost = part.profile().maintenance_cost;
    let available = ledger.available(SPARE_PARTS);
    if available < cost || ledger.debit(SPARE_PARTS, cost).is_err() {
        return Err(ServiceDenial::InsufficientSpares {
            needed: cost,
            available,
        });
    }

    part.settle_maintenance();
    Ok(MaintenanceReceipt { cost_paid: cost })
}

/// Repair a failed part
///
/// The full `repair_cost` must be available up front; the amount
/// actually debited is discounted by `uniform(0, proficiency)`.
pub fn repair(
    part: &mut PartReliability,
    operator: &Operator,
    ledger: &mut dyn Ledger,
    temperature: f64,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Result<RepairReceipt, ServiceDenial> {
    if !part.is_enabled() || !part.state().initialized {
        return Err(ServiceDenial::OutOfService);
    }
    if !part.has_failed() {
        return Err(ServiceDenial::NotFailed);
    }
    if temperature > config.service_temp_limit {
        return Err(ServiceDenial::TooHotToService {
            temperature,
            limit: config.service_temp_limit,
        });
    }
    if !skills::meets_all(part.requirements(), &operator.skills) {
        return Err(ServiceDenial::Unqualified {
            operator: operator.name.clone(),
        });
    }

    let cost = part.profile().repair_cost;
    let available = ledger.available(SPARE_PARTS);
    if available < cost {
        return Err(ServiceDenial::InsufficientSpares {
            needed: cost,
            available,
        });
    }

    let discount = rng.gen::<f64>() * operator.proficiency.clamp(0.0, 1.0);
    let cost_paid = (cost * (1.0 - discount)).round();

    if ledger.debit(SPARE_PARTS, cost_paid).is_err() {
        return Err(ServiceDenial::InsufficientSpares {
            needed: cost_paid,
            available,
        });
    }

    let event = part.settle_repair();
    let saved = cost - cost_paid;
    if saved > 0.0 {
        tracing::info!(
            part = %part.name(),
            operator = %operator.name,
            saved,
            "repair discount saved spares"
        );
    }

    Ok(RepairReceipt {
        cost_paid,
        saved,
        event,
    })
}
