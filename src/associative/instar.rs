use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::layers::LayerConnection;
use crate::math::matrix::Matrix;
use crate::network::connection::{validate_linear_connection, ConnectionSpec};
use crate::train::{train_loop, ErrorHistory, TrainConfig, Trainable};
use crate::utils::format::ArrayLike;

fn default_n_unconditioned() -> usize {
    1
}

fn default_step() -> f64 {
    0.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstarOptions {
    /// Number of leading inputs that act as the unconditioned stimulus.
    /// Their weights never change. At least 1.
    #[serde(default = "default_n_unconditioned")]
    pub n_unconditioned: usize,
    #[serde(default = "default_step")]
    pub step: f64,
    /// Stop once an epoch moves the weights by at most this much on average.
    #[serde(default)]
    pub epsilon: Option<f64>,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for InstarOptions {
    fn default() -> Self {
        InstarOptions {
            n_unconditioned: default_n_unconditioned(),
            step: default_step(),
            epsilon: None,
            verbose: false,
        }
    }
}

/// Grossberg's instar: an unsupervised step-associative network.
///
/// Inputs split into the first `n_unconditioned` columns, whose weights stay
/// fixed and make the unit fire, and the conditioned rest. Whenever an output
/// fires, the conditioned weights of that output move toward the input:
///
/// `W[u.., j] += step · (x[u..] - W[u.., j]) · y[j]`
#[derive(Debug)]
pub struct Instar {
    connection: LayerConnection,
    weight: Matrix,
    bias: Matrix,
    options: InstarOptions,
    history: ErrorHistory,
}

impl Instar {
    /// Validates the connection and options.
    ///
    /// Without an explicit input-layer weight, the unconditioned rows start
    /// at 1 and every other weight at 0.
    pub fn new(connection: impl Into<ConnectionSpec>, options: InstarOptions) -> Result<Instar> {
        let connection = validate_linear_connection(connection.into())?;
        let n_inputs = connection.input_layer().size;
        let n_outputs = connection.output_layer().size;

        if options.n_unconditioned < 1 {
            return Err(NetworkError::InvalidConfig(
                "n_unconditioned must be at least 1".to_string(),
            ));
        }
        if n_inputs <= options.n_unconditioned {
            return Err(NetworkError::InvalidConfig(format!(
                "number of unconditioned inputs ({}) should be less than the number of inputs ({})",
                options.n_unconditioned, n_inputs
            )));
        }
        if !(options.step.is_finite() && options.step > 0.0) {
            return Err(NetworkError::InvalidConfig(format!(
                "step must be a positive number, got {}",
                options.step
            )));
        }

        let weight = match &connection.input_layer().weight {
            Some(w) if w.shape() == (n_inputs, n_outputs) => w.clone(),
            Some(w) => {
                return Err(NetworkError::InvalidShape(format!(
                    "input layer weight has shape {:?}, expected {:?}",
                    w.shape(),
                    (n_inputs, n_outputs)
                )));
            }
            None => {
                let mut w = Matrix::zeros(n_inputs, n_outputs);
                for row in w.data.iter_mut().take(options.n_unconditioned) {
                    row.fill(1.0);
                }
                w
            }
        };
        let bias = match &connection.input_layer().bias {
            Some(b) if b.shape() == (1, n_outputs) => b.clone(),
            Some(b) => {
                return Err(NetworkError::InvalidShape(format!(
                    "input layer bias has shape {:?}, expected {:?}",
                    b.shape(),
                    (1, n_outputs)
                )));
            }
            None => Matrix::zeros(1, n_outputs),
        };

        Ok(Instar {
            connection,
            weight,
            bias,
            options,
            history: ErrorHistory::new(),
        })
    }

    pub fn weight(&self) -> &Matrix {
        &self.weight
    }

    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    pub fn options(&self) -> &InstarOptions {
        &self.options
    }

    pub fn connection(&self) -> &LayerConnection {
        &self.connection
    }

    pub fn errors(&self) -> &[f64] {
        self.history.errors()
    }

    pub fn last_error(&self) -> Option<f64> {
        self.history.last()
    }

    /// Step-activated output. One-dimensional input is a single sample.
    pub fn predict(&self, input: impl Into<ArrayLike>) -> Result<Matrix> {
        let x = self.format_input(input.into())?;
        Ok(self.activate(&x))
    }

    /// Runs up to `epochs` passes over `input`, one sample at a time, and
    /// returns the last epoch's mean absolute weight change.
    pub fn train(&mut self, input: impl Into<ArrayLike>, epochs: usize) -> Result<f64> {
        let mut config = TrainConfig::new(epochs);
        config.epsilon = self.options.epsilon;
        self.train_with(input, &config)
    }

    pub fn train_with(&mut self, input: impl Into<ArrayLike>, config: &TrainConfig) -> Result<f64> {
        let x = self.format_input(input.into())?;
        if self.options.verbose {
            log::info!(
                "training instar on {} samples for up to {} epochs",
                x.rows, config.epochs
            );
        }

        let mut history = std::mem::take(&mut self.history);
        let result = train_loop(self, &x, None, config, &mut history);
        self.history = history;

        if self.options.verbose {
            if let Ok(error) = &result {
                log::info!("instar training finished with weight change {error:.6}");
            }
        }
        result
    }

    fn format_input(&self, input: ArrayLike) -> Result<Matrix> {
        let x = input.into_formatted(false);
        if x.cols != self.weight.rows {
            return Err(NetworkError::InvalidShape(format!(
                "input has {} features, network expects {}",
                x.cols, self.weight.rows
            )));
        }
        Ok(x)
    }

    fn activate(&self, x: &Matrix) -> Matrix {
        let activation = &self.connection.input_layer().activation;
        (x.clone() * self.weight.clone())
            .add_row(&self.bias)
            .map(|v| activation.function(v))
    }
}

impl Trainable for Instar {
    fn train_epoch(&mut self, input: &Matrix, _target: Option<&Matrix>) -> Result<f64> {
        let n_unconditioned = self.options.n_unconditioned;
        let step = self.options.step;
        let before = self.weight.clone();

        for i in 0..input.rows {
            let input_row = input.row(i);
            let output = self.activate(&input_row);
            let x = &input_row.data[0];

            for k in n_unconditioned..self.weight.rows {
                for j in 0..self.weight.cols {
                    let w = self.weight.data[k][j];
                    self.weight.data[k][j] = w + step * (x[k] - w) * output.data[0][j];
                }
            }
        }

        let n_conditioned = (self.weight.rows - n_unconditioned) * self.weight.cols;
        let moved: f64 = self.weight.data[n_unconditioned..].iter()
            .zip(before.data[n_unconditioned..].iter())
            .flat_map(|(a, b)| a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()))
            .sum();
        Ok(moved / n_conditioned as f64)
    }
}
