pub mod attribute_dict;
pub mod format;
pub mod frame;
pub mod int_array;

pub use attribute_dict::AttributeKeyDict;
pub use format::{format_data, ArrayLike};
pub use frame::{DataFrame, Series};
pub use int_array::{is_int_array, IsInteger, Scalar};
