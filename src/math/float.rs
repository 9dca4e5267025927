//! Process-wide float precision.
//!
//! The precision is read from `LINEAR_NN_FLOATX` (`float32` or `float64`) the
//! first time it is needed and can be overridden with [`set_floatx`]. Values
//! are always stored as `f64`; under `Float32` they are rounded through `f32`.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

pub const FLOATX_ENV: &str = "LINEAR_NN_FLOATX";

const UNSET: u8 = 0;
const FLOAT32: u8 = 1;
const FLOAT64: u8 = 2;

static FLOATX: AtomicU8 = AtomicU8::new(UNSET);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatX {
    Float32,
    Float64,
}

impl FloatX {
    /// Parses `float32`/`float64` (also `f32`/`f64`), case-insensitively.
    pub fn parse(name: &str) -> Option<FloatX> {
        match name.trim().to_ascii_lowercase().as_str() {
            "float32" | "f32" => Some(FloatX::Float32),
            "float64" | "f64" => Some(FloatX::Float64),
            _ => None,
        }
    }

    fn to_tag(self) -> u8 {
        match self {
            FloatX::Float32 => FLOAT32,
            FloatX::Float64 => FLOAT64,
        }
    }

    /// Rounds `x` to this precision.
    pub fn cast(self, x: f64) -> f64 {
        match self {
            FloatX::Float32 => x as f32 as f64,
            FloatX::Float64 => x,
        }
    }
}

/// Current precision, read at call time.
pub fn floatx() -> FloatX {
    match FLOATX.load(Ordering::Relaxed) {
        FLOAT32 => FloatX::Float32,
        FLOAT64 => FloatX::Float64,
        _ => {
            let from_env = std::env::var(FLOATX_ENV).ok();
            let resolved = match from_env.as_deref().map(FloatX::parse) {
                Some(Some(p)) => p,
                Some(None) => {
                    log::warn!(
                        "ignoring {}={:?}, falling back to float64",
                        FLOATX_ENV,
                        from_env.as_deref().unwrap_or_default()
                    );
                    FloatX::Float64
                }
                None => FloatX::Float64,
            };
            // A concurrent set_floatx wins over the environment.
            let _ = FLOATX.compare_exchange(UNSET, resolved.to_tag(), Ordering::Relaxed, Ordering::Relaxed);
            floatx()
        }
    }
}

pub fn set_floatx(precision: FloatX) {
    FLOATX.store(precision.to_tag(), Ordering::Relaxed);
}

/// Conversion to the configured float precision.
pub trait AsFloat {
    type Output;

    fn as_float(&self) -> Self::Output;
}

/// Converts a scalar or array to the configured float precision.
pub fn asfloat<T: AsFloat + ?Sized>(value: &T) -> T::Output {
    value.as_float()
}

macro_rules! scalar_as_float {
    ($($t:ty),*) => {
        $(
            impl AsFloat for $t {
                type Output = f64;

                fn as_float(&self) -> f64 {
                    floatx().cast(*self as f64)
                }
            }
        )*
    };
}

scalar_as_float!(f64, f32, i32, i64, usize);

impl<T: AsFloat<Output = f64>> AsFloat for [T] {
    type Output = Vec<f64>;

    fn as_float(&self) -> Vec<f64> {
        self.iter().map(AsFloat::as_float).collect()
    }
}

impl<T: AsFloat<Output = f64>> AsFloat for Vec<T> {
    type Output = Vec<f64>;

    fn as_float(&self) -> Vec<f64> {
        self.as_slice().as_float()
    }
}

impl AsFloat for Matrix {
    type Output = Matrix;

    fn as_float(&self) -> Matrix {
        let precision = floatx();
        self.map(|x| precision.cast(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_names() {
        assert_eq!(FloatX::parse("F32"), Some(FloatX::Float32));
        assert_eq!(FloatX::parse(" float64 "), Some(FloatX::Float64));
        assert_eq!(FloatX::parse("half"), None);
    }

    #[test]
    fn float32_cast_rounds() {
        let x = 0.1_f64;
        assert_ne!(FloatX::Float32.cast(x), x);
        assert_eq!(FloatX::Float64.cast(x), x);
    }
}
