pub mod config;
pub mod constants;
pub mod control;
pub mod delta_v_system;
pub mod errors;
pub mod telemetry_system;

pub use config::{load_config, StackingRule, TelemetryConfig};
pub use constants::*;
pub use control::launch_stages::StageMassProfile;
pub use control::propulsion::EngineSnapshot;
pub use control::structure::{group_part_masses, StageMassAggregator, StageMassGrouping};
pub use errors::TelemetryError;

// Re-export commonly used items from delta_v_system
pub use delta_v_system::reducer::{DeltaVEntry, DeltaVReport, StageAggregationReducer};
pub use delta_v_system::rocket_equation::RocketEquation;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::frame::{
    delta_v_status, EngineReading, PartReading, PropellantReading, TelemetryFrame,
};
pub use telemetry_system::telemetry::Telemetry;
