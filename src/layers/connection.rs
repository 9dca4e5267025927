use serde::{Serialize, Deserialize};

use crate::layers::layer::Layer;

/// An ordered chain of layers, input first. Holds at least two layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConnection")]
pub struct LayerConnection {
    layers: Vec<Layer>,
}

#[derive(Deserialize)]
struct RawConnection {
    layers: Vec<Layer>,
}

impl TryFrom<RawConnection> for LayerConnection {
    type Error = String;

    fn try_from(raw: RawConnection) -> Result<Self, Self::Error> {
        if raw.layers.len() < 2 {
            return Err(format!("a connection needs at least two layers, got {}", raw.layers.len()));
        }
        Ok(LayerConnection { layers: raw.layers })
    }
}

impl LayerConnection {
    pub(crate) fn new(layers: Vec<Layer>) -> LayerConnection {
        LayerConnection { layers }
    }

    /// Appends `next` to the end of the chain.
    pub fn then(mut self, next: Layer) -> LayerConnection {
        self.layers.push(next);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn input_layer_mut(&mut self) -> &mut Layer {
        &mut self.layers[0]
    }

    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }
}
