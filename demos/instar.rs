use linear_nn::{AttributeKeyDict, Instar, InstarOptions, Layer, Matrix};

fn main() {
    env_logger::init();

    let coef: AttributeKeyDict<f64> = [("lower_value", 0.0), ("upper_value", 1.0)]
        .into_iter()
        .collect();
    let input_layer = Layer::step_with_coef(4, &coef)
        .expect("known coefficients")
        .with_weight(Matrix::from_column(vec![3.0, 0.0, 0.0, 0.0]));

    let options = InstarOptions { n_unconditioned: 1, step: 1.0, ..InstarOptions::default() };
    let mut instar = Instar::new(input_layer.connect(Layer::output(1)), options)
        .expect("valid instar structure");

    let input_data = Matrix::from_data(vec![
        vec![0.0, 1.0, -1.0, -1.0],
        vec![1.0, 1.0, -1.0, -1.0],
    ]);

    // Before training the conditioned stimulus alone does not fire the unit.
    let probe = vec![0.0, 1.0, -1.0, -1.0];
    println!("before: {:?}", instar.predict(probe.clone()).expect("4 features"));

    instar.train(input_data, 10).expect("4 features");
    println!("errors: {:?}", instar.errors());
    println!("weight: {:?}", instar.weight().data);
    println!("after: {:?}", instar.predict(probe).expect("4 features"));
}
