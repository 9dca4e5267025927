use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;
use crate::optim::rule::LinearRule;

/// Rosenblatt's rule: `e = target - output`, `ΔW = step · xᵀe`, `Δb = step · e`.
/// Only misclassified samples move the weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Perceptron;

impl LinearRule for Perceptron {
    fn weight_delta(
        &self,
        input_row: &Matrix,
        output: &Matrix,
        _raw_output: &Matrix,
        target: &Matrix,
        step: f64,
    ) -> (Matrix, Matrix) {
        let error = target.clone() - output.clone();
        let weight_delta = (input_row.transpose() * error.clone()).map(|x| x * step);
        let bias_delta = error.map(|x| x * step);
        (weight_delta, bias_delta)
    }
}
