use linear_nn::{Layer, LinearNetwork, LinearOptions, LossType, Matrix, Perceptron};

fn main() {
    env_logger::init();

    let connection = Layer::step(2).connect(Layer::output(1));
    let options = LinearOptions::default().with_step(0.5).with_error(LossType::Mae);
    let mut network = LinearNetwork::new(connection, Perceptron, options)
        .expect("a 2-1 step connection is valid");

    let inputs = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]);
    let expected_outputs = Matrix::from_column(vec![0.0, 0.0, 0.0, 1.0]);

    let epochs = 50;
    for epoch in 0..epochs {
        let error = network
            .train(inputs.clone(), expected_outputs.clone(), 1)
            .expect("shapes match");
        if epoch % 10 == 0 {
            println!("Epoch {epoch}: error = {error:.6}");
        }
    }

    let outputs = network.predict(inputs.clone()).expect("shapes match");
    for (input, output) in inputs.data.iter().zip(outputs.data.iter()) {
        println!("Input: {:?} -> Output: {}", input, output[0]);
    }
}
