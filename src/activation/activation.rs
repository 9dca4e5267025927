use serde::{Serialize, Deserialize};
use std::f64::consts::E;

use crate::error::{NetworkError, Result};
use crate::utils::attribute_dict::AttributeKeyDict;

pub const DEFAULT_LOWER_VALUE: f64 = 0.0;
pub const DEFAULT_UPPER_VALUE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Threshold activation: `upper_value` when `x > 0`, `lower_value` otherwise.
    /// Input layers of linear and associative networks must use it.
    Step { lower_value: f64, upper_value: f64 },
    Sigmoid,
    Tanh,
    Identity,
}

impl ActivationFunction {
    /// Step activation with 0/1 outputs.
    pub fn step() -> ActivationFunction {
        ActivationFunction::Step {
            lower_value: DEFAULT_LOWER_VALUE,
            upper_value: DEFAULT_UPPER_VALUE,
        }
    }

    /// Builds a step activation from a `function_coef` mapping. Both
    /// `lower_value` and `upper_value` are optional; unknown keys are rejected.
    pub fn step_from_coef(coef: &AttributeKeyDict<f64>) -> Result<ActivationFunction> {
        if let Some(key) = coef.keys().find(|k| *k != "lower_value" && *k != "upper_value") {
            return Err(NetworkError::InvalidConfig(format!(
                "unknown step coefficient '{key}'"
            )));
        }
        Ok(ActivationFunction::Step {
            lower_value: coef.get("lower_value").copied().unwrap_or(DEFAULT_LOWER_VALUE),
            upper_value: coef.get("upper_value").copied().unwrap_or(DEFAULT_UPPER_VALUE),
        })
    }

    pub fn is_step(&self) -> bool {
        matches!(self, ActivationFunction::Step { .. })
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Step { lower_value, upper_value } => {
                if x > 0.0 { *upper_value } else { *lower_value }
            }
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Identity => x,
        }
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_strict_at_zero() {
        let step = ActivationFunction::step();
        assert_eq!(step.function(0.0), 0.0);
        assert_eq!(step.function(1e-9), 1.0);
        assert_eq!(step.function(-3.0), 0.0);
    }

    #[test]
    fn coef_overrides_bounds() {
        let mut coef = AttributeKeyDict::new();
        coef.set_attr("lower_value", -1.0);
        let step = ActivationFunction::step_from_coef(&coef).unwrap();
        assert_eq!(step, ActivationFunction::Step { lower_value: -1.0, upper_value: 1.0 });
    }

    #[test]
    fn coef_rejects_unknown_keys() {
        let mut coef = AttributeKeyDict::new();
        coef.set_attr("threshold", 0.5);
        assert!(ActivationFunction::step_from_coef(&coef).is_err());
    }
}
