// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s² (g0, not the local body's gravity)

// Structural group tags used by the telemetry provider
pub const PAYLOAD_GROUP: &str = "satellite_bus";
pub const FIRST_STAGE_GROUP: &str = "first_stage";
pub const SECOND_STAGE_GROUP: &str = "second_stage";

// Demo vehicle (see main.rs)
pub const POLL_COUNT: usize = 6;
pub const POLL_INTERVAL: f64 = 10.0; // s
