//! Simple linear regression.

/// Linear function `y = intercept + slope * x` fitted with ordinary least squares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleLinearRegression {
    intercept: f64,
    slope: f64,
}

impl SimpleLinearRegression {
    /// Creates the model from its coefficients.
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Fits the model to observations `(x[i], y[i])`.
    ///
    /// At least two distinct values of `x` are required.
    pub fn fit(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len(), "Incorrect number of observations, x and y should have equal sizes");
        assert!(x.len() >= 2, "At least two observations are required for linear regression");

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let (mut sxy, mut sxx) = (0., 0.);
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            sxy += (xi - mean_x) * (yi - mean_y);
            sxx += (xi - mean_x) * (xi - mean_x);
        }
        assert!(sxx > 0., "At least two distinct values of x are required for linear regression");

        let slope = sxy / sxx;
        Self {
            intercept: mean_y - slope * mean_x,
            slope,
        }
    }

    /// Returns the intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Evaluates the model at `x`.
    pub fn compute(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::SimpleLinearRegression;

    #[test]
    fn test_exact_line() {
        let model = SimpleLinearRegression::fit(&[0., 1., 2., 3.], &[1., 3., 5., 7.]);
        assert_abs_diff_eq!(model.intercept(), 1., epsilon = 1e-12);
        assert_abs_diff_eq!(model.slope(), 2., epsilon = 1e-12);
        assert_abs_diff_eq!(model.compute(10.), 21., epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_points() {
        let model = SimpleLinearRegression::fit(&[0., 1., 2.], &[0., 2., 1.]);
        assert_abs_diff_eq!(model.slope(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept(), 0.5, epsilon = 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_constant_x() {
        SimpleLinearRegression::fit(&[1., 1.], &[0., 2.]);
    }
}
