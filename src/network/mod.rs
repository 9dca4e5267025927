pub mod connection;
pub mod linear;
pub mod spec;

pub use connection::{validate_linear_connection, ConnectionSpec};
pub use linear::{LinearNetwork, LinearOptions, LinearSnapshot};
pub use spec::{NetworkSpec, RuleKind};
