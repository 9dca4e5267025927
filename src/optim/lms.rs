use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;
use crate::optim::rule::LinearRule;

/// Normalized Widrow-Hoff rule: the error is measured before the step
/// activation and the update is divided by the squared input norm.
///
/// `e = target - raw`, `ΔW = step · xᵀe / ‖x‖²`, `Δb = step · e / ‖x‖²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Lms;

impl LinearRule for Lms {
    fn weight_delta(
        &self,
        input_row: &Matrix,
        _output: &Matrix,
        raw_output: &Matrix,
        target: &Matrix,
        step: f64,
    ) -> (Matrix, Matrix) {
        let norm = input_row.iter().map(|x| x * x).sum::<f64>();
        if norm == 0.0 {
            log::warn!("skipping LMS update for an all-zero input row");
            return (
                Matrix::zeros(input_row.cols, raw_output.cols),
                Matrix::zeros(1, raw_output.cols),
            );
        }

        let scale = step / norm;
        let error = target.clone() - raw_output.clone();
        let weight_delta = (input_row.transpose() * error.clone()).map(|x| x * scale);
        let bias_delta = error.map(|x| x * scale);
        (weight_delta, bias_delta)
    }

    fn scores_raw_output(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_input_gives_zero_update() {
        let x = Matrix::zeros(1, 3);
        let raw = Matrix::from_row(vec![0.5, -0.5]);
        let target = Matrix::from_row(vec![1.0, 0.0]);
        let (dw, db) = Lms.weight_delta(&x, &raw, &raw, &target, 0.5);
        assert_eq!(dw, Matrix::zeros(3, 2));
        assert_eq!(db, Matrix::zeros(1, 2));
    }

    #[test]
    fn single_update_hits_target_with_unit_step() {
        // With step 1 and no bias term the raw output of the same row lands
        // on the target: x · (W + ΔW) = raw + e.
        let x = Matrix::from_row(vec![1.0, 2.0]);
        let raw = Matrix::from_row(vec![0.0]);
        let target = Matrix::from_row(vec![5.0]);
        let (dw, _) = Lms.weight_delta(&x, &raw, &raw, &target, 1.0);
        let moved = (x * dw).data[0][0];
        assert!((moved - 5.0).abs() < 1e-12);
    }
}
