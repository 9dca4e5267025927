pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod associative;
pub mod loss;
pub mod optim;
pub mod train;
pub mod utils;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use math::float::{asfloat, floatx, set_floatx, FloatX};
pub use activation::activation::ActivationFunction;
pub use layers::{is_layer_accept_1d_feature, Layer, LayerConnection};
pub use network::{validate_linear_connection, ConnectionSpec, LinearNetwork, LinearOptions, NetworkSpec};
pub use associative::{Instar, InstarOptions};
pub use loss::LossType;
pub use optim::{LinearRule, Lms, Perceptron};
pub use train::{ErrorHistory, TrainConfig};
pub use utils::{format_data, is_int_array, ArrayLike, AttributeKeyDict, DataFrame, Scalar, Series};
