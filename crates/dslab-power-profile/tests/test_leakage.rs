use approx::assert_abs_diff_eq;

use dslab_power_profile::leakage::{ConstantLeakagePowerModel, LeakagePowerModel, LinearLeakagePowerModel};

const TEMPERATURE: [f64; 9] = [
    318.15, 328.15, 338.15, 348.15, 358.15, 368.15, 378.15, 388.15, 398.15,
];
const COEFFICIENT: [f64; 9] = [
    0.5460, 0.6304, 0.7326, 0.8550, 1.0000, 1.1711, 1.3734, 1.6067, 1.8737,
];

#[test]
fn test_linear_model() {
    let model = LinearLeakagePowerModel::new(1., &TEMPERATURE, &COEFFICIENT);
    assert_abs_diff_eq!(model.get_power(358.15), 1.088, epsilon = 0.001);
}

#[test]
fn test_linear_model_nominal_power() {
    let model = LinearLeakagePowerModel::new(2., &TEMPERATURE, &COEFFICIENT);
    assert_abs_diff_eq!(model.get_power(358.15), 2.1753, epsilon = 0.001);
    assert!(model.get_power(398.15) > model.get_power(318.15));
}

#[test]
fn test_boxed_models() {
    let models: Vec<Box<dyn LeakagePowerModel>> = vec![
        Box::new(ConstantLeakagePowerModel::new(0.5)),
        Box::new(LinearLeakagePowerModel::new(1., &[300., 400.], &[1., 2.])),
    ];
    let cloned = models.clone();
    assert_eq!(cloned[0].get_power(350.), 0.5);
    assert_abs_diff_eq!(cloned[1].get_power(350.), 1.5, epsilon = 1e-12);
}
