/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the flocking simulation, and the Param enum that
 * is the tuning interface for them: every parameter has a label, a default,
 * a valid range and a slider step. The UI enumerates Param::ALL instead of
 * knowing the individual fields.
 *
 * Parameters can be saved to and loaded from a JSON config file.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Parameters for the simulation that can be adjusted via UI
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub max_speed: f32,
    pub max_force: f32,
    pub visual_scale: f32,
    pub separation_weight: f32,
    pub pillar_separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            max_speed: Param::MaxSpeed.spec().default,
            max_force: Param::MaxForce.spec().default,
            visual_scale: Param::VisualScale.spec().default,
            separation_weight: Param::SeparationWeight.spec().default,
            pillar_separation_weight: Param::PillarSeparationWeight.spec().default,
            alignment_weight: Param::AlignmentWeight.spec().default,
            cohesion_weight: Param::CohesionWeight.spec().default,
        }
    }
}

/// Range and presentation of a single tunable parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    pub label: &'static str,
    pub default: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamSpec {
    pub fn range(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }
}

/// A named, tunable simulation parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    MaxSpeed,
    MaxForce,
    VisualScale,
    SeparationWeight,
    PillarSeparationWeight,
    AlignmentWeight,
    CohesionWeight,
}

impl Param {
    /// Every parameter, in the order the settings panel lists them.
    pub const ALL: [Param; 7] = [
        Param::MaxSpeed,
        Param::MaxForce,
        Param::VisualScale,
        Param::SeparationWeight,
        Param::PillarSeparationWeight,
        Param::AlignmentWeight,
        Param::CohesionWeight,
    ];

    pub fn spec(self) -> ParamSpec {
        match self {
            Param::MaxSpeed => ParamSpec {
                label: "Max Speed",
                default: 3.0,
                min: 0.0,
                max: 50.0,
                step: 1.0,
            },
            Param::MaxForce => ParamSpec {
                label: "Max Steering Force",
                default: 0.03,
                min: 0.01,
                max: 0.4,
                step: 0.01,
            },
            Param::VisualScale => ParamSpec {
                label: "Boid Scale",
                default: 2.0,
                min: 0.1,
                max: 20.0,
                step: 0.1,
            },
            Param::SeparationWeight => ParamSpec {
                label: "Separation Weight",
                default: 1.5,
                min: 0.0,
                max: 20.0,
                step: 0.1,
            },
            Param::PillarSeparationWeight => ParamSpec {
                label: "Pillar Separation Weight",
                default: 10.0,
                min: 0.0,
                max: 20.0,
                step: 0.1,
            },
            Param::AlignmentWeight => ParamSpec {
                label: "Alignment Weight",
                default: 1.0,
                min: 0.0,
                max: 2.0,
                step: 0.1,
            },
            Param::CohesionWeight => ParamSpec {
                label: "Cohesion Weight",
                default: 1.0,
                min: 0.0,
                max: 2.0,
                step: 0.1,
            },
        }
    }
}

impl SimulationParams {
    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::MaxSpeed => self.max_speed,
            Param::MaxForce => self.max_force,
            Param::VisualScale => self.visual_scale,
            Param::SeparationWeight => self.separation_weight,
            Param::PillarSeparationWeight => self.pillar_separation_weight,
            Param::AlignmentWeight => self.alignment_weight,
            Param::CohesionWeight => self.cohesion_weight,
        }
    }

    // Set a parameter, clamped to its valid range. Returns the stored value.
    pub fn set(&mut self, param: Param, value: f32) -> f32 {
        let value = param.spec().clamp(value);
        let slot = match param {
            Param::MaxSpeed => &mut self.max_speed,
            Param::MaxForce => &mut self.max_force,
            Param::VisualScale => &mut self.visual_scale,
            Param::SeparationWeight => &mut self.separation_weight,
            Param::PillarSeparationWeight => &mut self.pillar_separation_weight,
            Param::AlignmentWeight => &mut self.alignment_weight,
            Param::CohesionWeight => &mut self.cohesion_weight,
        };
        *slot = value;
        value
    }

    // Restore every parameter to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Force every parameter back into its valid range
    pub fn clamp_all(&mut self) {
        for param in Param::ALL {
            let value = self.get(param);
            self.set(param, value);
        }
    }

    // Parameters whose value differs from `other`
    pub fn changed_since(&self, other: &SimulationParams) -> Vec<Param> {
        Param::ALL
            .into_iter()
            .filter(|&param| self.get(param) != other.get(param))
            .collect()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    // Load parameters from a JSON file. Missing fields take their defaults and
    // out-of-range values are clamped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)?;
        let mut params: SimulationParams = serde_json::from_str(&json)?;
        params.clamp_all();
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parameter_table() {
        let params = SimulationParams::default();
        assert_eq!(params.max_speed, 3.0);
        assert_eq!(params.max_force, 0.03);
        assert_eq!(params.visual_scale, 2.0);
        assert_eq!(params.separation_weight, 1.5);
        assert_eq!(params.pillar_separation_weight, 10.0);
        assert_eq!(params.alignment_weight, 1.0);
        assert_eq!(params.cohesion_weight, 1.0);
    }

    #[test]
    fn every_default_is_inside_its_range() {
        for param in Param::ALL {
            let spec = param.spec();
            assert!(spec.range().contains(&spec.default), "{:?}", param);
            assert!(spec.step > 0.0);
        }
    }

    #[test]
    fn set_clamps_to_range() {
        let mut params = SimulationParams::default();
        assert_eq!(params.set(Param::MaxSpeed, 100.0), 50.0);
        assert_eq!(params.max_speed, 50.0);
        assert_eq!(params.set(Param::MaxForce, 0.0), 0.01);
        assert_eq!(params.set(Param::AlignmentWeight, -1.0), 0.0);
        assert_eq!(params.set(Param::CohesionWeight, 1.5), 1.5);
    }

    #[test]
    fn set_rejects_nan() {
        let mut params = SimulationParams::default();
        params.set(Param::VisualScale, f32::NAN);
        assert_eq!(params.visual_scale, 2.0);
    }

    #[test]
    fn get_reads_back_set() {
        let mut params = SimulationParams::default();
        for param in Param::ALL {
            let spec = param.spec();
            params.set(param, spec.max);
            assert_eq!(params.get(param), spec.max);
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut params = SimulationParams::default();
        params.set(Param::SeparationWeight, 7.0);
        params.set(Param::MaxSpeed, 12.0);
        params.reset();
        assert_eq!(params, SimulationParams::default());
    }

    #[test]
    fn changed_since_lists_modified_parameters() {
        let before = SimulationParams::default();
        let mut after = before.clone();
        after.set(Param::CohesionWeight, 0.5);
        assert_eq!(after.changed_since(&before), vec![Param::CohesionWeight]);
        assert!(before.changed_since(&before).is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params: SimulationParams = serde_json::from_str(r#"{ "max_speed": 8.0 }"#).unwrap();
        assert_eq!(params.max_speed, 8.0);
        assert_eq!(params.pillar_separation_weight, 10.0);
    }
}
