use serde::{Serialize, Deserialize};

use crate::loss::{mae::MaeLoss, mse::MseLoss};
use crate::math::matrix::Matrix;

/// Selects how a network scores its predictions after each epoch.
///
/// - `Mse` — mean squared error (default).
/// - `Mae` — mean absolute error; for step outputs this is the fraction of
///   misclassified units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    Mse,
    Mae,
}

impl LossType {
    pub fn loss(self, predicted: &Matrix, expected: &Matrix) -> f64 {
        match self {
            LossType::Mse => MseLoss::loss(predicted, expected),
            LossType::Mae => MaeLoss::loss(predicted, expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn losses_on_known_values() {
        let predicted = Matrix::from_row(vec![1.0, 0.0, 3.0]);
        let expected = Matrix::from_row(vec![0.0, 0.0, 1.0]);
        assert_eq!(LossType::Mse.loss(&predicted, &expected), 5.0 / 3.0);
        assert_eq!(LossType::Mae.loss(&predicted, &expected), 1.0);
    }
}
