pub mod frame;
pub mod telemetry;
