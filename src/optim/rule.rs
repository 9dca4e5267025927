use crate::math::matrix::Matrix;

/// Per-sample update rule of a linear network.
///
/// All matrices are single rows: `input_row` is (1, n_inputs) and the others
/// are (1, n_outputs). Returns the weight delta (n_inputs, n_outputs) and the
/// bias delta (1, n_outputs), both already scaled by `step`.
pub trait LinearRule {
    fn weight_delta(
        &self,
        input_row: &Matrix,
        output: &Matrix,
        raw_output: &Matrix,
        target: &Matrix,
        step: f64,
    ) -> (Matrix, Matrix);

    /// Whether the epoch error is measured on `x · W + b` instead of the
    /// step-activated output.
    fn scores_raw_output(&self) -> bool {
        false
    }
}

impl<R: LinearRule + ?Sized> LinearRule for Box<R> {
    fn weight_delta(
        &self,
        input_row: &Matrix,
        output: &Matrix,
        raw_output: &Matrix,
        target: &Matrix,
        step: f64,
    ) -> (Matrix, Matrix) {
        (**self).weight_delta(input_row, output, raw_output, target, step)
    }

    fn scores_raw_output(&self) -> bool {
        (**self).scores_raw_output()
    }
}
