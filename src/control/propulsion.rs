use serde::{Deserialize, Serialize};

use crate::errors::TelemetryError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub stage: i32,
    pub max_thrust: f64,        // N, at current ambient pressure
    pub max_vacuum_thrust: f64, // N
    pub specific_impulse_at_pressure: f64, // s
    pub vacuum_specific_impulse: f64,      // s
    pub available_propellant_mass: f64,    // kg, summed over all propellants
}

impl EngineSnapshot {
    pub fn new(
        stage: i32,
        max_thrust: f64,
        max_vacuum_thrust: f64,
        specific_impulse_at_pressure: f64,
        vacuum_specific_impulse: f64,
        available_propellant_mass: f64,
    ) -> Self {
        EngineSnapshot {
            stage,
            max_thrust,
            max_vacuum_thrust,
            specific_impulse_at_pressure,
            vacuum_specific_impulse,
            available_propellant_mass,
        }
    }

    // Only NaN and infinity are rejected; zero and negative are flight states
    pub fn validate(&self, source_name: &str) -> Result<(), TelemetryError> {
        let fields = [
            ("max_thrust", self.max_thrust),
            ("max_vacuum_thrust", self.max_vacuum_thrust),
            ("specific_impulse_at_pressure", self.specific_impulse_at_pressure),
            ("vacuum_specific_impulse", self.vacuum_specific_impulse),
            ("available_propellant_mass", self.available_propellant_mass),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TelemetryError::InvalidReading {
                    source_name: source_name.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.available_propellant_mass <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_snapshot() {
        let engine = EngineSnapshot::new(1, 900_000.0, 1_000_000.0, 280.0, 310.0, 40_000.0);
        assert_eq!(engine.stage, 1);
        assert_eq!(engine.max_thrust, 900_000.0);
        assert_eq!(engine.max_vacuum_thrust, 1_000_000.0);
        assert_eq!(engine.specific_impulse_at_pressure, 280.0);
        assert_eq!(engine.vacuum_specific_impulse, 310.0);
        assert_eq!(engine.available_propellant_mass, 40_000.0);
    }

    #[test]
    fn test_validate_accepts_degenerate_values() {
        let engine = EngineSnapshot::new(0, 0.0, 0.0, 0.0, -1.0, 0.0);
        assert!(engine.validate("engine 0").is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let engine = EngineSnapshot::new(0, f64::NAN, 1.0, 1.0, 1.0, 1.0);
        match engine.validate("engine 3") {
            Err(TelemetryError::InvalidReading {
                source_name, field, ..
            }) => {
                assert_eq!(source_name, "engine 3");
                assert_eq!(field, "max_thrust");
            }
            other => panic!("expected InvalidReading, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_infinite_propellant() {
        let engine = EngineSnapshot::new(0, 1.0, 1.0, 1.0, 1.0, f64::INFINITY);
        assert!(engine.validate("engine 0").is_err());
    }

    #[test]
    fn test_is_out_of_fuel() {
        let mut engine = EngineSnapshot::new(0, 1.0, 1.0, 1.0, 1.0, 10.0);
        assert_eq!(engine.is_out_of_fuel(), false);
        engine.available_propellant_mass = 0.0;
        assert_eq!(engine.is_out_of_fuel(), true);
    }
}
