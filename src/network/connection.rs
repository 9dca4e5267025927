use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::layers::{Layer, LayerConnection};
use crate::utils::int_array::{is_int_array, Scalar};

/// What a caller may hand over as the structure of a network.
///
/// Deserializes untagged: `[4, 1]` is `Sizes`, an array of layer objects is
/// `Layers` and `{"layers": [...]}` is `Connection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConnectionSpec {
    /// Number of units per layer, input first.
    Sizes(Vec<Scalar>),
    /// Layers that were listed but never connected.
    Layers(Vec<Layer>),
    Connection(LayerConnection),
}

impl ConnectionSpec {
    pub fn sizes<I, T>(sizes: I) -> ConnectionSpec
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        ConnectionSpec::Sizes(sizes.into_iter().map(Into::into).collect())
    }

    /// Number of layers described.
    pub fn len(&self) -> usize {
        match self {
            ConnectionSpec::Sizes(sizes) => sizes.len(),
            ConnectionSpec::Layers(layers) => layers.len(),
            ConnectionSpec::Connection(connection) => connection.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> &'static str {
        match self {
            ConnectionSpec::Sizes(_) => "a sequence of non-integer sizes",
            ConnectionSpec::Layers(_) => "a list of unconnected layers",
            ConnectionSpec::Connection(_) => "a layer connection",
        }
    }
}

impl From<LayerConnection> for ConnectionSpec {
    fn from(connection: LayerConnection) -> Self {
        ConnectionSpec::Connection(connection)
    }
}

impl From<Vec<Scalar>> for ConnectionSpec {
    fn from(sizes: Vec<Scalar>) -> Self {
        ConnectionSpec::Sizes(sizes)
    }
}

impl From<Vec<Layer>> for ConnectionSpec {
    fn from(layers: Vec<Layer>) -> Self {
        ConnectionSpec::Layers(layers)
    }
}

/// Checks that `spec` describes a network without hidden layers whose input
/// layer is step-activated, building the connection from sizes if needed.
///
/// # Errors
/// - `InvalidConnectionLength` if `spec` does not describe exactly two layers
/// - `InvalidStructure` if `spec` is neither two integer sizes nor a
///   connection, or if a size is not a positive integer
/// - `Connection` if the input layer lacks a step activation
pub fn validate_linear_connection(spec: ConnectionSpec) -> Result<LayerConnection> {
    if spec.len() != 2 {
        return Err(NetworkError::InvalidConnectionLength { found: spec.len() });
    }

    let connection = match spec {
        ConnectionSpec::Sizes(sizes) if is_int_array(&sizes) => {
            let input_size = layer_size(sizes[0])?;
            let output_size = layer_size(sizes[1])?;
            Layer::step(input_size).connect(Layer::output(output_size))
        }
        ConnectionSpec::Connection(connection) => connection,
        other => {
            return Err(NetworkError::InvalidStructure(format!(
                "expected two integer sizes or a layer connection, got {}",
                other.kind()
            )));
        }
    };

    if !connection.input_layer().activation.is_step() {
        return Err(NetworkError::Connection(
            "input layer should contain a step activation function (`Layer::step`)".to_string(),
        ));
    }

    Ok(connection)
}

fn layer_size(value: Scalar) -> Result<usize> {
    match value.as_size() {
        Some(size) if size > 0 => Ok(size),
        _ => Err(NetworkError::InvalidStructure(format!(
            "layer size must be a positive integer, got {}",
            value.as_f64()
        ))),
    }
}
