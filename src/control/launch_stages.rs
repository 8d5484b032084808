use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageMassProfile {
    pub stage_index: usize,
    pub start_mass: f64, // kg
}

impl StageMassProfile {
    pub fn new(stage_index: usize, start_mass: f64) -> Self {
        StageMassProfile {
            stage_index,
            start_mass,
        }
    }
}
