use crate::error::Result;
use crate::math::float::asfloat;
use crate::math::matrix::Matrix;
use crate::utils::frame::{DataFrame, Series};

/// Everything the training code accepts as input or target data.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayLike {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(Matrix),
    Series(Series),
    Frame(DataFrame),
}

impl ArrayLike {
    /// Builds a two-dimensional input from nested rows, rejecting ragged ones.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<ArrayLike> {
        Ok(ArrayLike::Matrix(Matrix::try_from_rows(rows)?))
    }

    /// Number of axes before formatting.
    pub fn ndim(&self) -> usize {
        match self {
            ArrayLike::Scalar(_) => 0,
            ArrayLike::Vector(_) | ArrayLike::Series(_) => 1,
            ArrayLike::Matrix(_) | ArrayLike::Frame(_) => 2,
        }
    }

    /// Consumes the input and formats it in place.
    ///
    /// One-dimensional input of length n becomes (n, 1) when `is_feature1d`
    /// (n samples with one feature each) and (1, n) otherwise (one sample
    /// with n features).
    pub fn into_formatted(self, is_feature1d: bool) -> Matrix {
        match self {
            ArrayLike::Scalar(x) => shape_1d(vec![asfloat(&x)], is_feature1d),
            ArrayLike::Vector(values) => shape_1d(asfloat(&values), is_feature1d),
            ArrayLike::Series(series) => shape_1d(asfloat(&series.values), is_feature1d),
            ArrayLike::Matrix(m) => asfloat(&m),
            ArrayLike::Frame(df) => asfloat(&df.into_values()),
        }
    }
}

/// Transforms data into the standardized two-dimensional format expected by
/// the learning algorithms. `None` is passed through unchanged.
///
/// The input is borrowed and a fresh array is always returned; use
/// [`ArrayLike::into_formatted`] to avoid the copy.
pub fn format_data(data: Option<&ArrayLike>, is_feature1d: bool) -> Option<Matrix> {
    data.map(|d| d.clone().into_formatted(is_feature1d))
}

fn shape_1d(values: Vec<f64>, is_feature1d: bool) -> Matrix {
    if is_feature1d {
        Matrix::from_column(values)
    } else {
        Matrix::from_row(values)
    }
}

impl From<f64> for ArrayLike {
    fn from(x: f64) -> Self {
        ArrayLike::Scalar(x)
    }
}

impl From<Vec<f64>> for ArrayLike {
    fn from(values: Vec<f64>) -> Self {
        ArrayLike::Vector(values)
    }
}

impl From<&[f64]> for ArrayLike {
    fn from(values: &[f64]) -> Self {
        ArrayLike::Vector(values.to_vec())
    }
}

impl From<Matrix> for ArrayLike {
    fn from(m: Matrix) -> Self {
        ArrayLike::Matrix(m)
    }
}

impl From<Series> for ArrayLike {
    fn from(s: Series) -> Self {
        ArrayLike::Series(s)
    }
}

impl From<DataFrame> for ArrayLike {
    fn from(df: DataFrame) -> Self {
        ArrayLike::Frame(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_becomes_one_by_one() {
        let m = ArrayLike::Scalar(2.5).into_formatted(true);
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m.data[0][0], 2.5);
    }

    #[test]
    fn matrix_keeps_shape() {
        let data = ArrayLike::from(Matrix::zeros(3, 2));
        assert_eq!(format_data(Some(&data), false).unwrap().shape(), (3, 2));
    }
}
