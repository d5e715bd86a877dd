//! Mutable per-part reliability state
//!
//! Everything in `ReliabilityState` is plain numeric data that
//! round-trips through the persistence codec. Runtime references
//! (the part adapter, the host handles) live outside this struct and
//! are re-bound after a load.

use serde::{Deserialize, Serialize};

/// Persisted numeric state of one part's wear tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityState {
    /// Whether the tracker has been armed by a reset
    pub initialized: bool,
    /// Accumulated weighted exposure since the last reset, seconds
    pub age_seconds: f64,
    /// Sim clock at the last reset; `+inf` means never
    pub time_of_last_reset: f64,
    /// Sim clock at the last inspection; `-inf` means never
    pub time_of_last_inspection: f64,
    /// Sim clock at the last tick
    pub time_of_last_update: f64,
    /// MTBF after decay, hours; starts at the profile nominal value
    pub current_mtbf_hours: f64,
    /// Cached lifetime time constant, seconds
    pub lifetime_seconds: f64,
    /// Whether the part is currently failed
    pub has_failed: bool,
}

impl Default for ReliabilityState {
    fn default() -> Self {
        Self {
            initialized: false,
            age_seconds: 0.0,
            time_of_last_reset: f64::INFINITY,
            time_of_last_inspection: f64::NEG_INFINITY,
            time_of_last_update: 0.0,
            current_mtbf_hours: f64::INFINITY,
            lifetime_seconds: f64::INFINITY,
            has_failed: false,
        }
    }
}

impl ReliabilityState {
    /// Exponential decay factor `exp(-age / lifetime)`
    ///
    /// Equals 1.0 for a new part and shrinks toward zero as the age
    /// approaches and passes the lifetime constant.
    pub fn decay_factor(&self) -> f64 {
        (-self.age_seconds / self.lifetime_seconds).exp()
    }

    /// Fraction of the lifetime constant already consumed
    pub fn wear_ratio(&self) -> f64 {
        self.age_seconds / self.lifetime_seconds
    }

    /// Residual value multiplier for a recovered part
    ///
    /// Hosts can use this to depreciate salvage: a new part returns
    /// 1.0, a part at one lifetime returns `1/e`.
    pub fn salvage_factor(&self) -> f64 {
        self.decay_factor()
    }

    /// Reduce the age by the given fraction, clamping at zero
    pub fn discount_age(&mut self, fraction: f64) {
        self.age_seconds *= 1.0 - fraction;
        self.age_seconds = self.age_seconds.max(0.0);
    }

    /// Condition tier for inspection reports
    pub fn condition(&self) -> Condition {
        if self.has_failed {
            Condition::Failed
        } else {
            Condition::from_wear(self.wear_ratio())
        }
    }
}

/// Coarse condition tiers reported by an inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// The part has already failed
    Failed,
    /// Wear below 10% of the lifetime constant
    LikeNew,
    /// Wear below 50%
    Good,
    /// Wear below 75%
    ShowingAge,
    /// Wear below 125%
    DueReplacement,
    /// Wear below 200%
    Risky,
    /// Wear below 300%
    WornOut,
    /// Anything beyond
    Terrible,
}

impl Condition {
    /// Map a wear ratio onto a condition tier
    pub fn from_wear(ratio: f64) -> Self {
        if ratio < 0.10 {
            Condition::LikeNew
        } else if ratio < 0.50 {
            Condition::Good
        } else if ratio < 0.75 {
            Condition::ShowingAge
        } else if ratio < 1.25 {
            Condition::DueReplacement
        } else if ratio < 2.00 {
            Condition::Risky
        } else if ratio < 3.00 {
            Condition::WornOut
        } else {
            Condition::Terrible
        }
    }

    /// Wording shown to the operator during an inspection
    pub fn describe(&self) -> &'static str {
        match self {
            Condition::Failed => "the part has failed!",
            Condition::LikeNew => "This part seems to be as good as new",
            Condition::Good => "This part is still in good condition",
            Condition::ShowingAge => "This part is starting to show its age",
            Condition::DueReplacement => "It looks like it's time to get a new one",
            Condition::Risky => "It really isn't a good idea to keep using this part",
            Condition::WornOut => "This part needs replacing soon",
            Condition::Terrible => "This part is in terrible condition",
        }
    }
}
