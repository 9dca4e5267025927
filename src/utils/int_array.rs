use serde::{Serialize, Deserialize};

/// A number as it arrived from the caller, keeping the integer/float
/// distinction (`2` and `2.0` are different values here).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(v) => v as f64,
            Scalar::Float(v) => v,
        }
    }

    /// The value as a non-negative size, if it is an integer that fits.
    pub fn as_size(self) -> Option<usize> {
        match self {
            Scalar::Int(v) => usize::try_from(v).ok(),
            Scalar::Float(_) => None,
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

pub trait IsInteger {
    fn is_integer(&self) -> bool;
}

impl IsInteger for Scalar {
    fn is_integer(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }
}

macro_rules! integer_kind {
    ($value:literal => $($t:ty),*) => {
        $(
            impl IsInteger for $t {
                fn is_integer(&self) -> bool {
                    $value
                }
            }
        )*
    };
}

integer_kind!(true => i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
integer_kind!(false => f32, f64);

impl<T: IsInteger + ?Sized> IsInteger for &T {
    fn is_integer(&self) -> bool {
        (**self).is_integer()
    }
}

/// `true` only if every element of `sequence` is an integer.
/// An empty sequence is vacuously integral.
pub fn is_int_array<I>(sequence: I) -> bool
where
    I: IntoIterator,
    I::Item: IsInteger,
{
    sequence.into_iter().all(|element| element.is_integer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_sequence_is_not_integral() {
        let values = [Scalar::Int(1), Scalar::Float(2.0), Scalar::Int(3)];
        assert!(!is_int_array(&values));
    }

    #[test]
    fn json_keeps_float_marker() {
        let values: Vec<Scalar> = serde_json::from_str("[1, 2.0, 3]").unwrap();
        assert_eq!(values, vec![Scalar::Int(1), Scalar::Float(2.0), Scalar::Int(3)]);
    }

    #[test]
    fn negative_is_not_a_size() {
        assert_eq!(Scalar::Int(-1).as_size(), None);
        assert_eq!(Scalar::Int(4).as_size(), Some(4));
    }
}
