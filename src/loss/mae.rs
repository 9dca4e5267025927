use crate::math::matrix::Matrix;

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE over every element: mean(|predicted - expected|).
    /// Empty inputs give 0.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len();
        if n == 0 {
            return 0.0;
        }
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n as f64
    }
}
