pub mod aging;
pub mod events;
pub mod hazard;
pub mod part;
pub mod profile;
pub mod signals;
pub mod state;

pub use events::{EventKind, ReliabilityEvent};
pub use part::{InspectionReport, PartReliability};
pub use profile::{AgingPolicy, ProfileSet, ReliabilityProfile};
pub use signals::PartSignals;
pub use state::{Condition, ReliabilityState};
