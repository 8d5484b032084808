use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::rocket_equation::RocketEquation;
use crate::control::propulsion::EngineSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaVEntry {
    pub stage: i32,
    pub start_mass: f64,
    pub end_mass: f64,
    pub burned_mass: f64,
    pub max_thrust: f64, // vacuum thrust
    pub twr: f64,
    pub slt: f64,
    pub isp: f64, // at current pressure
    pub atom_delta_v: f64,
    pub vac_delta_v: f64,
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeltaVReport {
    pub stage_delta_v_atom: f64,
    pub stage_delta_v_vac: f64,
    pub total_delta_v_atom: f64,
    pub total_delta_v_vac: f64,
    pub delta_v_list: Vec<DeltaVEntry>,
}

impl DeltaVReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn correlate_start_mass(index: usize, stage_start_masses: &[f64]) -> f64 {
    match stage_start_masses.len() {
        0 => 0.0,
        len => stage_start_masses[index.min(len - 1)],
    }
}

pub struct StageAggregationReducer {
    pub equation: RocketEquation,
}

impl Default for StageAggregationReducer {
    fn default() -> Self {
        StageAggregationReducer::new(RocketEquation::default())
    }
}

impl StageAggregationReducer {
    pub fn new(equation: RocketEquation) -> Self {
        StageAggregationReducer { equation }
    }

    pub fn build_entry(&self, engine: &EngineSnapshot, start_mass: f64) -> DeltaVEntry {
        if engine.is_out_of_fuel() {
            debug!("Stage {} engine is drained; delta-v resolves to 0", engine.stage);
        }
        let burned_mass = engine.available_propellant_mass;
        let mut end_mass = start_mass - burned_mass;
        if end_mass < 0.0 {
            warn!(
                "Stage {} burns {:.1} kg from a start mass of {:.1} kg; clamping end mass to 0",
                engine.stage, burned_mass, start_mass
            );
            end_mass = 0.0;
        }

        let atom_isp = engine.specific_impulse_at_pressure;
        let vac_isp = engine.vacuum_specific_impulse;

        DeltaVEntry {
            stage: engine.stage,
            start_mass,
            end_mass,
            burned_mass,
            max_thrust: engine.max_vacuum_thrust,
            twr: self
                .equation
                .thrust_to_weight(engine.max_vacuum_thrust, start_mass),
            slt: self.equation.thrust_to_weight(engine.max_thrust, start_mass),
            isp: atom_isp,
            atom_delta_v: self.equation.delta_v(atom_isp, burned_mass, start_mass),
            vac_delta_v: self.equation.delta_v(vac_isp, burned_mass, start_mass),
            time: self
                .equation
                .burn_time(atom_isp, burned_mass, engine.max_thrust),
        }
    }

    pub fn build_report(
        &self,
        engines: &[EngineSnapshot],
        stage_start_masses: &[f64],
    ) -> DeltaVReport {
        let delta_v_list: Vec<DeltaVEntry> = engines
            .iter()
            .enumerate()
            .map(|(i, engine)| {
                if i >= stage_start_masses.len() {
                    debug!(
                        "Engine {} has no stage group of its own; reusing the last start mass",
                        i
                    );
                }
                self.build_entry(engine, correlate_start_mass(i, stage_start_masses))
            })
            .collect();

        let total_delta_v_atom = delta_v_list.iter().map(|entry| entry.atom_delta_v).sum();
        let total_delta_v_vac = delta_v_list.iter().map(|entry| entry.vac_delta_v).sum();
        let (stage_delta_v_atom, stage_delta_v_vac) = delta_v_list
            .last()
            .map_or((0.0, 0.0), |entry| (entry.atom_delta_v, entry.vac_delta_v));

        DeltaVReport {
            stage_delta_v_atom,
            stage_delta_v_vac,
            total_delta_v_atom,
            total_delta_v_vac,
            delta_v_list,
        }
    }
}
