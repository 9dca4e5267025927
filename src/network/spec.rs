use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::connection::{validate_linear_connection, ConnectionSpec};
use crate::network::linear::{LinearNetwork, LinearOptions};
use crate::optim::{LinearRule, Lms, Perceptron};
use crate::utils::attribute_dict::AttributeKeyDict;

/// Which learning rule a [`NetworkSpec`] trains with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Perceptron,
    Lms,
}

impl RuleKind {
    pub fn build(self) -> Box<dyn LinearRule> {
        match self {
            RuleKind::Perceptron => Box::new(Perceptron),
            RuleKind::Lms => Box::new(Lms),
        }
    }
}

/// A fully serializable description of a linear network: structure, rule
/// and options, without trained weights.
///
/// ```json
/// {
///   "name": "and-gate",
///   "connection": [2, 1],
///   "rule": "perceptron",
///   "function_coef": { "lower_value": 0, "upper_value": 1 },
///   "options": { "step": 0.5, "error": "mae" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name.
    pub name: String,
    pub connection: ConnectionSpec,
    pub rule: RuleKind,
    /// Overrides the bounds of the input layer's step activation.
    #[serde(default)]
    pub function_coef: Option<AttributeKeyDict<f64>>,
    #[serde(default)]
    pub options: LinearOptions,
}

impl NetworkSpec {
    /// Validates the structure and builds an untrained network.
    pub fn build(&self) -> Result<LinearNetwork<Box<dyn LinearRule>>> {
        let mut connection = validate_linear_connection(self.connection.clone())?;
        if let Some(coef) = &self.function_coef {
            connection.input_layer_mut().activation = ActivationFunction::step_from_coef(coef)?;
        }
        LinearNetwork::new(connection, self.rule.build(), self.options.clone())
    }

    pub fn from_json(text: &str) -> Result<NetworkSpec> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
