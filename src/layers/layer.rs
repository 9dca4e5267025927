use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::layers::connection::LayerConnection;
use crate::math::matrix::Matrix;
use crate::utils::attribute_dict::AttributeKeyDict;
use crate::error::Result;

/// One layer of units.
///
/// `weight` and `bias` are optional initial parameters: when absent, the
/// network that owns the layer picks its own initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub activation: ActivationFunction,
    #[serde(default)]
    pub weight: Option<Matrix>,
    #[serde(default)]
    pub bias: Option<Matrix>,
}

impl Layer {
    pub fn new(size: usize, activation: ActivationFunction) -> Layer {
        Layer { size, activation, weight: None, bias: None }
    }

    /// Layer with a 0/1 step activation.
    pub fn step(size: usize) -> Layer {
        Layer::new(size, ActivationFunction::step())
    }

    /// Step layer whose bounds come from a `function_coef` mapping.
    pub fn step_with_coef(size: usize, coef: &AttributeKeyDict<f64>) -> Result<Layer> {
        Ok(Layer::new(size, ActivationFunction::step_from_coef(coef)?))
    }

    /// Terminal layer; it only marks the number of outputs.
    pub fn output(size: usize) -> Layer {
        Layer::new(size, ActivationFunction::Identity)
    }

    pub fn sigmoid(size: usize) -> Layer {
        Layer::new(size, ActivationFunction::Sigmoid)
    }

    pub fn tanh(size: usize) -> Layer {
        Layer::new(size, ActivationFunction::Tanh)
    }

    pub fn with_weight(mut self, weight: Matrix) -> Layer {
        self.weight = Some(weight);
        self
    }

    pub fn with_bias(mut self, bias: Matrix) -> Layer {
        self.bias = Some(bias);
        self
    }

    pub fn with_activation(mut self, activation: ActivationFunction) -> Layer {
        self.activation = activation;
        self
    }

    /// Connects this layer to `next`, starting a chain.
    pub fn connect(self, next: Layer) -> LayerConnection {
        LayerConnection::new(vec![self, next])
    }
}

/// A layer with a single unit accepts one-dimensional input as a column
/// of samples rather than as one sample.
pub fn is_layer_accept_1d_feature(layer: &Layer) -> bool {
    layer.size == 1
}
