pub mod connection;
pub mod layer;

pub use connection::LayerConnection;
pub use layer::{is_layer_accept_1d_feature, Layer};
