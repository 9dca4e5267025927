pub mod instar;

pub use instar::{Instar, InstarOptions};
