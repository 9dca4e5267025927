use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over every element: mean((predicted - expected)²).
    /// Empty inputs give 0.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len();
        if n == 0 {
            return 0.0;
        }
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n as f64
    }
}
