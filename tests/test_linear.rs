// Tests for linear networks trained with the perceptron and LMS rules.

use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};

use approx::assert_relative_eq;
use linear_nn::{
    ConnectionSpec, Layer, LinearNetwork, LinearOptions, Lms, LossType, Matrix, NetworkError,
    Perceptron, TrainConfig,
};

fn and_inputs() -> Matrix {
    Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ])
}

fn and_targets() -> Matrix {
    Matrix::from_column(vec![0.0, 0.0, 0.0, 1.0])
}

fn and_perceptron() -> LinearNetwork<Perceptron> {
    let options = LinearOptions::default()
        .with_step(0.5)
        .with_error(LossType::Mae)
        .with_epsilon(0.0);
    LinearNetwork::new(ConnectionSpec::sizes([2, 1]), Perceptron, options).unwrap()
}

#[test]
fn perceptron_learns_and() {
    let mut network = and_perceptron();
    let error = network.train(and_inputs(), and_targets(), 1000).unwrap();

    assert_eq!(error, 0.0);
    assert_eq!(network.predict(and_inputs()).unwrap(), and_targets());
    assert!(network.errors().len() < 1000);
    assert_eq!(network.last_error(), Some(0.0));
}

#[test]
fn perceptron_with_fixed_weights_does_not_move_when_correct() {
    let layer = Layer::step(2)
        .with_weight(Matrix::from_column(vec![1.0, 1.0]))
        .with_bias(Matrix::from_row(vec![-1.5]));
    let mut network =
        LinearNetwork::new(layer.connect(Layer::output(1)), Perceptron, LinearOptions::default())
            .unwrap();

    network.train(and_inputs(), and_targets(), 3).unwrap();
    assert_eq!(network.weight(), &Matrix::from_column(vec![1.0, 1.0]));
    assert_eq!(network.bias(), &Matrix::from_row(vec![-1.5]));
    assert_eq!(network.errors(), &[0.0, 0.0, 0.0]);
}

#[test]
fn perceptron_single_update() {
    let layer = Layer::step(2)
        .with_weight(Matrix::zeros(2, 1))
        .with_bias(Matrix::zeros(1, 1));
    let options = LinearOptions::default().with_step(0.5);
    let mut network = LinearNetwork::new(layer.connect(Layer::output(1)), Perceptron, options).unwrap();

    // 0 · x = 0 is not above the threshold, so the output is 0 and the error 1.
    network.train(Matrix::from_row(vec![1.0, 2.0]), Matrix::from_row(vec![1.0]), 1).unwrap();
    assert_eq!(network.weight(), &Matrix::from_column(vec![0.5, 1.0]));
    assert_eq!(network.bias(), &Matrix::from_row(vec![0.5]));
}

#[test]
fn lms_error_decreases() {
    let layer = Layer::step(2).with_weight(Matrix::zeros(2, 1));
    let options = LinearOptions::default().with_step(0.1);
    let mut network = LinearNetwork::new(layer.connect(Layer::output(1)), Lms, options).unwrap();

    let inputs = Matrix::from_data(vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
        vec![-1.0, 1.0],
    ]);
    let targets = Matrix::from_column(vec![1.0, -1.0, 0.0, -2.0]);
    network.train(inputs, targets, 50).unwrap();

    let errors = network.errors();
    assert_eq!(errors.len(), 50);
    assert!(errors[49] < errors[0]);
    assert!(errors[49] < 0.05, "final error {}", errors[49]);
}

#[test]
fn lms_fits_consistent_linear_target() {
    // target = x1 - x2 is exactly representable.
    let layer = Layer::step(2).with_weight(Matrix::zeros(2, 1));
    let options = LinearOptions::default().with_step(0.5);
    let mut network = LinearNetwork::new(layer.connect(Layer::output(1)), Lms, options).unwrap();

    let inputs = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]);
    let targets = Matrix::from_column(vec![1.0, -1.0, 0.0]);
    network.train(inputs.clone(), targets.clone(), 300).unwrap();

    let raw = network.predict_raw(inputs).unwrap();
    for (r, t) in raw.iter().zip(targets.iter()) {
        assert_relative_eq!(*r, *t, epsilon = 1e-3);
    }
}

#[test]
fn one_dimensional_input_to_single_unit_is_a_column_of_samples() {
    let layer = Layer::step(1)
        .with_weight(Matrix::from_row(vec![1.0]))
        .with_bias(Matrix::zeros(1, 1));
    let network =
        LinearNetwork::new(layer.connect(Layer::output(1)), Perceptron, LinearOptions::default())
            .unwrap();

    let predicted = network.predict(vec![-1.0, 0.5, 2.0]).unwrap();
    assert_eq!(predicted, Matrix::from_column(vec![0.0, 1.0, 1.0]));
}

#[test]
fn one_dimensional_input_to_wide_layer_is_one_sample() {
    let network = and_perceptron();
    let predicted = network.predict(vec![1.0, 1.0]).unwrap();
    assert_eq!(predicted.shape(), (1, 1));
}

#[test]
fn mismatched_features_fail() {
    let network = and_perceptron();
    let err = network.predict(Matrix::zeros(2, 3)).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidShape(_)));
}

#[test]
fn mismatched_sample_counts_fail() {
    let mut network = and_perceptron();
    let err = network
        .train(and_inputs(), Matrix::from_column(vec![0.0, 1.0]), 1)
        .unwrap_err();
    assert!(matches!(err, NetworkError::InvalidShape(_)));
    assert!(network.errors().is_empty());
}

#[test]
fn non_positive_step_is_rejected() {
    for step in [0.0, -0.1, f64::NAN] {
        let options = LinearOptions::default().with_step(step);
        let err = LinearNetwork::new(ConnectionSpec::sizes([2, 1]), Perceptron, options).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));
    }
}

#[test]
fn wrong_initial_weight_shape_is_rejected() {
    let layer = Layer::step(2).with_weight(Matrix::zeros(3, 1));
    let err = LinearNetwork::new(layer.connect(Layer::output(1)), Perceptron, LinearOptions::default())
        .unwrap_err();
    assert!(matches!(err, NetworkError::InvalidShape(_)));
}

#[test]
fn progress_channel_reports_each_epoch() {
    let mut network = and_perceptron();
    let (tx, rx) = mpsc::channel();
    let config = TrainConfig::new(5).with_progress(tx);
    network.train_with(and_inputs(), and_targets(), &config).unwrap();
    drop(config);

    let stats: Vec<_> = rx.iter().collect();
    assert_eq!(stats.len(), 5);
    assert_eq!(stats[0].epoch, 1);
    assert_eq!(stats[4].total_epochs, 5);
    assert_eq!(stats.last().unwrap().error, network.last_error().unwrap());
}

#[test]
fn dropped_receiver_stops_training() {
    let mut network = and_perceptron();
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let config = TrainConfig::new(20).with_progress(tx);
    network.train_with(and_inputs(), and_targets(), &config).unwrap();
    assert_eq!(network.errors().len(), 1);
}

#[test]
fn stop_flag_prevents_training() {
    let mut network = and_perceptron();
    let before = network.weight().clone();
    let config = TrainConfig::new(20).with_stop_flag(Arc::new(AtomicBool::new(true)));
    let error = network.train_with(and_inputs(), and_targets(), &config).unwrap();

    assert_eq!(error, 0.0);
    assert!(network.errors().is_empty());
    assert_eq!(network.weight(), &before);
}

#[test]
fn save_and_load_round_trip() {
    let mut network = and_perceptron();
    network.train(and_inputs(), and_targets(), 1000).unwrap();

    let path = std::env::temp_dir().join(format!("linear_nn_roundtrip_{}.json", std::process::id()));
    let path = path.to_str().unwrap();
    network.save_json(path).unwrap();
    let loaded = LinearNetwork::load_json(path, Perceptron).unwrap();
    std::fs::remove_file(path).unwrap();

    for (a, b) in loaded.weight().iter().zip(network.weight().iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
    for (a, b) in loaded.bias().iter().zip(network.bias().iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
    assert_eq!(loaded.options(), network.options());
    assert_eq!(loaded.predict(and_inputs()).unwrap(), network.predict(and_inputs()).unwrap());
}

#[test]
fn empty_input_to_single_unit_predicts_nothing() {
    let network = LinearNetwork::new(ConnectionSpec::sizes([1, 1]), Perceptron, LinearOptions::default()).unwrap();
    let predicted = network.predict(Vec::<f64>::new()).unwrap();
    assert_eq!(predicted.shape(), (0, 1));
}

#[test]
fn corrupted_snapshot_is_a_json_error() {
    let network = and_perceptron();
    let mut snapshot = serde_json::to_value(network.snapshot()).unwrap();
    snapshot["weight"]["data"] = serde_json::json!([[1.0]]);

    let path = std::env::temp_dir().join(format!("linear_nn_corrupt_{}.json", std::process::id()));
    let path = path.to_str().unwrap();
    std::fs::write(path, snapshot.to_string()).unwrap();
    let result = LinearNetwork::load_json(path, Perceptron);
    std::fs::remove_file(path).unwrap();

    assert!(matches!(result, Err(NetworkError::Json(_))));
}
