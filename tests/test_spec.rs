// Tests for building networks from JSON descriptions.

use linear_nn::{ActivationFunction, LinearRule, LossType, Matrix, NetworkError, NetworkSpec};

#[test]
fn spec_builds_perceptron_with_coefficients() {
    let json = r#"{
        "name": "and-gate",
        "connection": [2, 1],
        "rule": "perceptron",
        "function_coef": { "lower_value": -1, "upper_value": 1 },
        "options": { "step": 0.5, "error": "mae", "epsilon": 0.0 }
    }"#;
    let spec = NetworkSpec::from_json(json).unwrap();
    let mut network = spec.build().unwrap();

    assert_eq!(
        network.connection().input_layer().activation,
        ActivationFunction::Step { lower_value: -1.0, upper_value: 1.0 }
    );
    assert_eq!(network.options().error, LossType::Mae);

    let inputs = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]);
    let targets = Matrix::from_column(vec![-1.0, -1.0, -1.0, 1.0]);
    network.train(inputs.clone(), targets.clone(), 1000).unwrap();
    assert_eq!(network.predict(inputs).unwrap(), targets);
}

#[test]
fn spec_defaults_options() {
    let spec = NetworkSpec::from_json(r#"{"name": "n", "connection": [3, 2], "rule": "lms"}"#).unwrap();
    let network = spec.build().unwrap();
    assert_eq!(network.options().step, 0.1);
    assert_eq!(network.options().error, LossType::Mse);
    assert_eq!(network.input_size(), 3);
    assert_eq!(network.output_size(), 2);
    assert!(network.rule().scores_raw_output());
}

#[test]
fn spec_with_three_layers_fails() {
    let spec = NetworkSpec::from_json(r#"{"name": "n", "connection": [3, 2, 1], "rule": "lms"}"#).unwrap();
    assert!(matches!(spec.build(), Err(NetworkError::InvalidConnectionLength { found: 3 })));
}

#[test]
fn spec_with_unknown_coefficient_fails() {
    let json = r#"{
        "name": "n",
        "connection": [2, 1],
        "rule": "perceptron",
        "function_coef": { "threshold": 0.5 }
    }"#;
    let spec = NetworkSpec::from_json(json).unwrap();
    assert!(matches!(spec.build(), Err(NetworkError::InvalidConfig(_))));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(NetworkSpec::from_json("{"), Err(NetworkError::Json(_))));
}
