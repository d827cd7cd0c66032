//! Leakage power models.

use dyn_clone::{clone_trait_object, DynClone};

use crate::regression::SimpleLinearRegression;

/// A model for estimating the leakage power consumption of a core based on its temperature.
pub trait LeakagePowerModel: DynClone {
    /// Returns leakage power consumption in W.
    ///
    /// Temperature should be passed in K.
    fn get_power(&self, temperature: f64) -> f64;
}

clone_trait_object!(LeakagePowerModel);

/// A leakage power model using a constant power consumption value.
#[derive(Clone)]
pub struct ConstantLeakagePowerModel {
    power: f64,
}

impl ConstantLeakagePowerModel {
    /// Creates a constant leakage power model.
    ///
    /// * `power` - The power consumption in W.
    pub fn new(power: f64) -> Self {
        Self { power }
    }
}

impl LeakagePowerModel for ConstantLeakagePowerModel {
    fn get_power(&self, _temperature: f64) -> f64 {
        self.power
    }
}

/// A leakage power model scaling the nominal power by a coefficient linear in temperature.
///
/// The coefficient is fitted with least squares to measurements of the relative leakage at several temperatures.
#[derive(Clone)]
pub struct LinearLeakagePowerModel {
    nominal: f64,
    model: SimpleLinearRegression,
}

impl LinearLeakagePowerModel {
    /// Creates a linear leakage power model.
    ///
    /// * `nominal` - The nominal leakage power consumption in W.
    /// * `temperature` - Temperatures in K at which the coefficients were measured.
    /// * `coefficient` - Leakage power relative to the nominal one at each temperature.
    pub fn new(nominal: f64, temperature: &[f64], coefficient: &[f64]) -> Self {
        Self {
            nominal,
            model: SimpleLinearRegression::fit(temperature, coefficient),
        }
    }
}

impl LeakagePowerModel for LinearLeakagePowerModel {
    fn get_power(&self, temperature: f64) -> f64 {
        self.nominal * self.model.compute(temperature)
    }
}
