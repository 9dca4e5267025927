use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::layers::{is_layer_accept_1d_feature, LayerConnection};
use crate::loss::loss_type::LossType;
use crate::math::matrix::Matrix;
use crate::network::connection::{validate_linear_connection, ConnectionSpec};
use crate::optim::rule::LinearRule;
use crate::train::{train_loop, ErrorHistory, TrainConfig, Trainable};
use crate::utils::format::ArrayLike;

fn default_step() -> f64 {
    0.1
}

/// Training options shared by every linear network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearOptions {
    /// Learning rate; must be positive.
    #[serde(default = "default_step")]
    pub step: f64,
    /// How the per-epoch error is measured.
    #[serde(default)]
    pub error: LossType,
    /// Stop training once the epoch error is at or below this value.
    #[serde(default)]
    pub epsilon: Option<f64>,
    /// Log start and end of training at info level.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for LinearOptions {
    fn default() -> Self {
        LinearOptions {
            step: default_step(),
            error: LossType::default(),
            epsilon: None,
            verbose: false,
        }
    }
}

impl LinearOptions {
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_error(mut self, error: LossType) -> Self {
        self.error = error;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(NetworkError::InvalidConfig(format!(
                "step must be a positive number, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

/// Serialized form of a trained linear network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSnapshot {
    pub connection: LayerConnection,
    pub weight: Matrix,
    pub bias: Matrix,
    pub options: LinearOptions,
}

/// A feedforward network without hidden layers: a step-activated input layer
/// fully connected to the output layer, trained by a [`LinearRule`].
#[derive(Debug)]
pub struct LinearNetwork<R: LinearRule> {
    connection: LayerConnection,
    weight: Matrix,
    bias: Matrix,
    rule: R,
    options: LinearOptions,
    history: ErrorHistory,
}

impl<R: LinearRule> LinearNetwork<R> {
    /// Validates `connection` and initializes the parameters.
    ///
    /// The input layer's `weight` and `bias` are used when present; otherwise
    /// the weight is drawn uniformly from [-1, 1) and the bias starts at zero.
    pub fn new(connection: impl Into<ConnectionSpec>, rule: R, options: LinearOptions) -> Result<Self> {
        options.validate()?;
        let connection = validate_linear_connection(connection.into())?;

        let n_inputs = connection.input_layer().size;
        let n_outputs = connection.output_layer().size;

        let weight = match &connection.input_layer().weight {
            Some(w) => expect_shape("weight", w, (n_inputs, n_outputs))?.clone(),
            None => Matrix::random(n_inputs, n_outputs),
        };
        let bias = match &connection.input_layer().bias {
            Some(b) => expect_shape("bias", b, (1, n_outputs))?.clone(),
            None => Matrix::zeros(1, n_outputs),
        };

        Ok(LinearNetwork {
            connection,
            weight,
            bias,
            rule,
            options,
            history: ErrorHistory::new(),
        })
    }

    pub fn connection(&self) -> &LayerConnection {
        &self.connection
    }

    pub fn weight(&self) -> &Matrix {
        &self.weight
    }

    pub fn bias(&self) -> &Matrix {
        &self.bias
    }

    pub fn options(&self) -> &LinearOptions {
        &self.options
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn input_size(&self) -> usize {
        self.weight.rows
    }

    pub fn output_size(&self) -> usize {
        self.weight.cols
    }

    /// Per-epoch errors of every `train` call so far.
    pub fn errors(&self) -> &[f64] {
        self.history.errors()
    }

    pub fn last_error(&self) -> Option<f64> {
        self.history.last()
    }

    /// Step-activated output, one row per sample.
    pub fn predict(&self, input: impl Into<ArrayLike>) -> Result<Matrix> {
        let x = self.format_input(input.into())?;
        Ok(self.activate(&self.raw(&x)))
    }

    /// Output before the step activation: `x · W + b`.
    pub fn predict_raw(&self, input: impl Into<ArrayLike>) -> Result<Matrix> {
        let x = self.format_input(input.into())?;
        Ok(self.raw(&x))
    }

    /// Trains for up to `epochs` epochs and returns the last epoch error.
    pub fn train(
        &mut self,
        input: impl Into<ArrayLike>,
        target: impl Into<ArrayLike>,
        epochs: usize,
    ) -> Result<f64> {
        let mut config = TrainConfig::new(epochs);
        config.epsilon = self.options.epsilon;
        self.train_with(input, target, &config)
    }

    /// Like `train`, with full control over the loop (progress channel,
    /// stop flag, epsilon).
    pub fn train_with(
        &mut self,
        input: impl Into<ArrayLike>,
        target: impl Into<ArrayLike>,
        config: &TrainConfig,
    ) -> Result<f64> {
        let x = self.format_input(input.into())?;
        let target: ArrayLike = target.into();
        let y = target.into_formatted(is_layer_accept_1d_feature(self.connection.output_layer()));

        if y.cols != self.output_size() {
            return Err(NetworkError::InvalidShape(format!(
                "target has {} columns, network has {} outputs",
                y.cols,
                self.output_size()
            )));
        }
        if y.rows != x.rows {
            return Err(NetworkError::InvalidShape(format!(
                "input has {} samples but target has {}",
                x.rows, y.rows
            )));
        }

        if self.options.verbose {
            log::info!(
                "training {}x{} linear network on {} samples for up to {} epochs",
                self.input_size(),
                self.output_size(),
                x.rows,
                config.epochs
            );
        }

        let mut history = std::mem::take(&mut self.history);
        let result = train_loop(self, &x, Some(&y), config, &mut history);
        self.history = history;

        if self.options.verbose {
            if let Ok(error) = &result {
                log::info!("training finished with error {error:.6}");
            }
        }
        result
    }

    pub fn snapshot(&self) -> LinearSnapshot {
        LinearSnapshot {
            connection: self.connection.clone(),
            weight: self.weight.clone(),
            bias: self.bias.clone(),
            options: self.options.clone(),
        }
    }

    /// Rebuilds a network from a snapshot; the connection is validated again.
    pub fn from_snapshot(snapshot: LinearSnapshot, rule: R) -> Result<Self> {
        let mut connection = snapshot.connection;
        let input_layer = connection.input_layer_mut();
        input_layer.weight = Some(snapshot.weight);
        input_layer.bias = Some(snapshot.bias);
        LinearNetwork::new(connection, rule, snapshot.options)
    }

    /// Writes the trained parameters as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.snapshot())?;
        Ok(())
    }

    /// Loads a network written by `save_json`.
    pub fn load_json(path: &str, rule: R) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let snapshot: LinearSnapshot = serde_json::from_reader(reader)?;
        LinearNetwork::from_snapshot(snapshot, rule)
    }

    fn format_input(&self, input: ArrayLike) -> Result<Matrix> {
        let x = input.into_formatted(is_layer_accept_1d_feature(self.connection.input_layer()));
        if x.cols != self.input_size() {
            return Err(NetworkError::InvalidShape(format!(
                "input has {} features, network expects {}",
                x.cols,
                self.input_size()
            )));
        }
        Ok(x)
    }

    fn raw(&self, x: &Matrix) -> Matrix {
        (x.clone() * self.weight.clone()).add_row(&self.bias)
    }

    fn activate(&self, raw: &Matrix) -> Matrix {
        let activation = &self.connection.input_layer().activation;
        raw.map(|v| activation.function(v))
    }
}

impl<R: LinearRule> Trainable for LinearNetwork<R> {
    fn train_epoch(&mut self, input: &Matrix, target: Option<&Matrix>) -> Result<f64> {
        let target = target.ok_or_else(|| {
            NetworkError::InvalidData("linear networks need a training target".to_string())
        })?;
        let step = self.options.step;

        for i in 0..input.rows {
            let input_row = input.row(i);
            let raw_output = self.raw(&input_row);
            let output = self.activate(&raw_output);
            let target_row = target.row(i);

            let (weight_delta, bias_delta) =
                self.rule.weight_delta(&input_row, &output, &raw_output, &target_row, step);
            self.weight = self.weight.clone() + weight_delta;
            self.bias = self.bias.clone() + bias_delta;
        }

        let raw = self.raw(input);
        let scored = if self.rule.scores_raw_output() { raw } else { self.activate(&raw) };
        Ok(self.options.error.loss(&scored, target))
    }
}

fn expect_shape<'a>(name: &str, m: &'a Matrix, shape: (usize, usize)) -> Result<&'a Matrix> {
    if m.shape() != shape {
        return Err(NetworkError::InvalidShape(format!(
            "input layer {} has shape {:?}, expected {:?}",
            name,
            m.shape(),
            shape
        )));
    }
    Ok(m)
}
