use std::collections::BTreeMap;

use log::debug;

use super::launch_stages::StageMassProfile;
use crate::config::{StackingRule, TelemetryConfig};
use crate::errors::TelemetryError;

#[derive(Debug, Clone, PartialEq)]
pub struct StageMassGrouping {
    pub payload_mass: f64,
    pub stages: Vec<(String, f64)>,
}

impl StageMassGrouping {
    pub fn new(payload_mass: f64, stages: Vec<(String, f64)>) -> Self {
        StageMassGrouping {
            payload_mass,
            stages,
        }
    }

    pub fn from_group_masses(
        group_masses: &BTreeMap<String, f64>,
        config: &TelemetryConfig,
    ) -> Result<Self, TelemetryError> {
        let lookup = |tag: &str| {
            group_masses
                .get(tag)
                .copied()
                .ok_or_else(|| TelemetryError::MissingStageGroup(tag.to_string()))
        };

        let payload_mass = lookup(config.payload_group.as_str())?;
        let stages = config
            .stage_groups
            .iter()
            .map(|tag| lookup(tag.as_str()).map(|mass| (tag.clone(), mass)))
            .collect::<Result<Vec<_>, _>>()?;

        for tag in group_masses.keys() {
            if *tag != config.payload_group && !config.stage_groups.contains(tag) {
                debug!("Ignoring untracked part group '{}'", tag);
            }
        }

        Ok(StageMassGrouping::new(payload_mass, stages))
    }

    pub fn get_total_mass(&self) -> f64 {
        let stages_mass: f64 = self.stages.iter().map(|(_, mass)| mass).sum();
        stages_mass + self.payload_mass
    }
}

pub fn group_part_masses<'a, I>(parts: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups = BTreeMap::new();
    for (tag, mass) in parts {
        *groups.entry(tag.to_string()).or_insert(0.0) += mass;
    }
    groups
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StageMassAggregator {
    pub stacking: StackingRule,
}

impl StageMassAggregator {
    pub fn new(stacking: StackingRule) -> Self {
        StageMassAggregator { stacking }
    }

    pub fn compute_start_masses(&self, grouping: &StageMassGrouping) -> Vec<f64> {
        let masses: Vec<f64> = grouping.stages.iter().map(|(_, mass)| *mass).collect();
        (0..masses.len())
            .map(|i| {
                let carried: f64 = match self.stacking {
                    StackingRule::Cumulative => masses[i..].iter().sum(),
                    StackingRule::PayloadPlusPrefix => masses[..=i].iter().sum(),
                };
                grouping.payload_mass + carried
            })
            .collect()
    }

    pub fn stage_mass_profile(&self, grouping: &StageMassGrouping) -> Vec<StageMassProfile> {
        self.compute_start_masses(grouping)
            .into_iter()
            .enumerate()
            .map(|(stage_index, start_mass)| StageMassProfile::new(stage_index, start_mass))
            .collect()
    }
}
