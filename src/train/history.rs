use serde::{Serialize, Deserialize};

/// Errors recorded after each training epoch, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorHistory {
    errors: Vec<f64>,
}

impl ErrorHistory {
    pub fn new() -> Self {
        ErrorHistory::default()
    }

    pub fn push(&mut self, error: f64) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Error of the most recent epoch, if any epoch has run.
    pub fn last(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
