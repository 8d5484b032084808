use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TelemetryConfig;
use crate::control::propulsion::EngineSnapshot;
use crate::control::structure::{group_part_masses, StageMassAggregator, StageMassGrouping};
use crate::delta_v_system::reducer::{DeltaVReport, StageAggregationReducer};
use crate::delta_v_system::rocket_equation::RocketEquation;
use crate::errors::TelemetryError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropellantReading {
    pub name: String,
    pub total_resource_available: f64, // kg
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineReading {
    pub stage: i32,
    pub max_thrust: f64,
    pub max_vacuum_thrust: f64,
    pub specific_impulse_at: f64,
    pub vacuum_specific_impulse: f64,
    pub propellants: Vec<PropellantReading>,
}

impl EngineReading {
    pub fn to_snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::new(
            self.stage,
            self.max_thrust,
            self.max_vacuum_thrust,
            self.specific_impulse_at,
            self.vacuum_specific_impulse,
            self.propellants
                .iter()
                .map(|propellant| propellant.total_resource_available)
                .sum(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartReading {
    pub tag: String,
    pub mass: f64, // kg
}

// Engine order is the provider's enumeration order and decides stage correlation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetryFrame {
    pub parts: Vec<PartReading>,
    pub engines: Vec<EngineReading>,
}

impl TelemetryFrame {
    pub fn from_json(document: &str) -> Result<Self, TelemetryError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn engine_snapshots(&self) -> Result<Vec<EngineSnapshot>, TelemetryError> {
        self.engines
            .iter()
            .enumerate()
            .map(|(i, reading)| {
                let snapshot = reading.to_snapshot();
                snapshot.validate(&format!("engine {}", i))?;
                Ok(snapshot)
            })
            .collect()
    }

    pub fn stage_grouping(
        &self,
        config: &TelemetryConfig,
    ) -> Result<StageMassGrouping, TelemetryError> {
        for part in &self.parts {
            if !part.mass.is_finite() {
                return Err(TelemetryError::InvalidReading {
                    source_name: format!("part '{}'", part.tag),
                    field: "mass",
                    value: part.mass,
                });
            }
        }
        let groups = group_part_masses(
            self.parts
                .iter()
                .map(|part| (part.tag.as_str(), part.mass)),
        );
        StageMassGrouping::from_group_masses(&groups, config)
    }
}

pub fn delta_v_status(
    frame: &TelemetryFrame,
    config: &TelemetryConfig,
) -> Result<DeltaVReport, TelemetryError> {
    let engines = frame.engine_snapshots()?;
    let grouping = frame.stage_grouping(config)?;
    debug!(
        "Tracked vehicle mass {:.1} kg across {} stages",
        grouping.get_total_mass(),
        grouping.stages.len()
    );
    let stage_start_masses =
        StageMassAggregator::new(config.stacking).compute_start_masses(&grouping);

    let reducer = StageAggregationReducer::new(RocketEquation::new(config.reference_gravity));
    Ok(reducer.build_report(&engines, &stage_start_masses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FRAME_JSON: &str = r#"{
        "parts": [
            {"tag": "satellite_bus", "mass": 500.0},
            {"tag": "first_stage", "mass": 40000.0},
            {"tag": "first_stage", "mass": 5000.0},
            {"tag": "second_stage", "mass": 9500.0},
            {"tag": "launch_clamp", "mass": 1200.0}
        ],
        "engines": [
            {
                "stage": 1,
                "max_thrust": 900000.0,
                "max_vacuum_thrust": 1000000.0,
                "specific_impulse_at": 280.0,
                "vacuum_specific_impulse": 310.0,
                "propellants": [
                    {"name": "LiquidFuel", "total_resource_available": 18000.0},
                    {"name": "Oxidizer", "total_resource_available": 22000.0}
                ]
            },
            {
                "stage": 0,
                "max_thrust": 100000.0,
                "max_vacuum_thrust": 120000.0,
                "specific_impulse_at": 300.0,
                "vacuum_specific_impulse": 340.0,
                "propellants": [
                    {"name": "LiquidFuel", "total_resource_available": 3600.0},
                    {"name": "Oxidizer", "total_resource_available": 4400.0}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_engine_reading_sums_propellants() {
        let frame = TelemetryFrame::from_json(FRAME_JSON).unwrap();
        let snapshots = frame.engine_snapshots().unwrap();

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].available_propellant_mass, 40_000.0);
        assert_eq!(snapshots[1].available_propellant_mass, 8_000.0);
        assert_eq!(snapshots[0].specific_impulse_at_pressure, 280.0);
    }

    #[test]
    fn test_engine_without_propellants() {
        let reading = EngineReading {
            stage: 0,
            max_thrust: 1.0,
            max_vacuum_thrust: 1.0,
            specific_impulse_at: 1.0,
            vacuum_specific_impulse: 1.0,
            propellants: Vec::new(),
        };
        assert!(reading.to_snapshot().is_out_of_fuel());
    }

    #[test]
    fn test_stage_grouping_ignores_clamps() {
        let frame = TelemetryFrame::from_json(FRAME_JSON).unwrap();
        let grouping = frame.stage_grouping(&TelemetryConfig::default()).unwrap();

        assert_eq!(grouping.payload_mass, 500.0);
        assert_eq!(grouping.stages[0], ("first_stage".to_string(), 45_000.0));
        assert_eq!(grouping.stages[1], ("second_stage".to_string(), 9_500.0));
    }

    #[test]
    fn test_delta_v_status() {
        let frame = TelemetryFrame::from_json(FRAME_JSON).unwrap();
        let report = delta_v_status(&frame, &TelemetryConfig::default()).unwrap();

        assert_eq!(report.delta_v_list.len(), 2);
        assert_eq!(report.delta_v_list[0].start_mass, 55_000.0);
        assert_eq!(report.delta_v_list[1].start_mass, 10_000.0);
        assert_abs_diff_eq!(
            report.stage_delta_v_vac,
            340.0 * 9.80665 * (10_000.0_f64 / 2_000.0).ln(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_missing_engine_field_is_malformed() {
        let document = r#"{"parts": [], "engines": [{"stage": 0, "max_thrust": 1.0}]}"#;
        let result = TelemetryFrame::from_json(document);
        assert!(matches!(result, Err(TelemetryError::MalformedFrame(_))));
    }

    #[test]
    fn test_missing_stage_group() {
        let frame = TelemetryFrame {
            parts: vec![PartReading {
                tag: "satellite_bus".to_string(),
                mass: 500.0,
            }],
            engines: Vec::new(),
        };
        let result = delta_v_status(&frame, &TelemetryConfig::default());
        assert!(matches!(result, Err(TelemetryError::MissingStageGroup(_))));
    }

    #[test]
    fn test_non_finite_part_mass() {
        let frame = TelemetryFrame {
            parts: vec![PartReading {
                tag: "first_stage".to_string(),
                mass: f64::NAN,
            }],
            engines: Vec::new(),
        };
        let result = frame.stage_grouping(&TelemetryConfig::default());
        assert!(matches!(
            result,
            Err(TelemetryError::InvalidReading { field: "mass", .. })
        ));
    }
}
