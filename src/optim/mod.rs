pub mod rule;
pub mod perceptron;
pub mod lms;

pub use rule::LinearRule;
pub use perceptron::Perceptron;
pub use lms::Lms;
