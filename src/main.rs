// Trains a linear network from the command line.
//
//   linear-nn                      perceptron on the built-in AND table
//   linear-nn data.csv             last column is the target
//   linear-nn data.csv spec.json   network described by a NetworkSpec
//
// Set RUST_LOG=debug to see per-epoch errors.
use std::env;
use std::process::ExitCode;

use linear_nn::{
    ConnectionSpec, DataFrame, LinearNetwork, LinearOptions, LinearRule, LossType, Matrix,
    NetworkSpec, Perceptron,
};

const EPOCHS: usize = 100;

fn main() -> ExitCode {
    env_logger::init();

    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> linear_nn::Result<()> {
    let (input, target) = match args.first() {
        Some(path) => split_target(DataFrame::from_csv(&std::fs::read_to_string(path)?)?.into_values()),
        None => and_table(),
    };

    let mut network = match args.get(1) {
        Some(spec_path) => NetworkSpec::load_json(spec_path)?.build()?,
        None => {
            let options = LinearOptions::default().with_error(LossType::Mae).with_epsilon(0.0);
            let rule: Box<dyn LinearRule> = Box::new(Perceptron);
            LinearNetwork::new(ConnectionSpec::sizes([input.cols as i64, 1]), rule, options)?
        }
    };

    let error = network.train(input.clone(), target, EPOCHS)?;
    println!("trained for {} epochs, last error = {error:.6}", network.errors().len());

    let predicted = network.predict(input.clone())?;
    for (x, y) in input.data.iter().zip(predicted.data.iter()) {
        println!("{x:?} -> {y:?}");
    }
    Ok(())
}

/// Splits off the last column as a (n, 1) target.
fn split_target(data: Matrix) -> (Matrix, Matrix) {
    let mut inputs = Vec::with_capacity(data.rows);
    let mut targets = Vec::with_capacity(data.rows);
    for mut row in data.data {
        let label = row.pop().unwrap_or_default();
        inputs.push(row);
        targets.push(label);
    }
    (Matrix::from_data(inputs), Matrix::from_column(targets))
}

fn and_table() -> (Matrix, Matrix) {
    let inputs = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]);
    (inputs, Matrix::from_column(vec![0.0, 0.0, 0.0, 1.0]))
}
