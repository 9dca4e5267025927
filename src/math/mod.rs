pub mod matrix;
pub mod float;

pub use matrix::Matrix;
pub use float::{asfloat, floatx, set_floatx, AsFloat, FloatX};
