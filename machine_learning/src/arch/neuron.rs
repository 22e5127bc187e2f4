use super::{Model, Params, activations::ActFn, regularization::RegFn};
use crate::data::BatchView;

/// A single neuron, `act(w * x + b)`, fitted under squared error with a weight penalty.
///
/// Holds no parameters; every operation takes them explicitly.
#[derive(Debug, Clone, Copy)]
pub struct Neuron {
    act_fn: ActFn,
    reg_fn: RegFn,
    lambda: f32,
}

impl Neuron {
    /// Returns a new `Neuron`.
    ///
    /// # Arguments
    /// * `act_fn` - The activation applied to the linear output.
    /// * `reg_fn` - The penalty charged on the weight.
    /// * `lambda` - The penalty's coefficient.
    pub fn new(act_fn: ActFn, reg_fn: RegFn, lambda: f32) -> Self {
        Self {
            act_fn,
            reg_fn,
            lambda,
        }
    }

    pub fn act_fn(&self) -> ActFn {
        self.act_fn
    }

    pub fn reg_fn(&self) -> RegFn {
        self.reg_fn
    }

    pub fn lambda(&self) -> f32 {
        self.lambda
    }

    pub fn predict(&self, feature: f32, params: &Params) -> f32 {
        self.act_fn.f(params.weight * feature + params.bias)
    }

    fn penalty(&self, params: &Params) -> f32 {
        self.reg_fn.penalty(params.weight, self.lambda)
    }

    /// Sum of squared errors plus the penalty, all over `n`.
    ///
    /// The penalty is added once per call, not once per sample.
    pub fn compute_loss(&self, batch: BatchView<'_>, params: &Params) -> f32 {
        let n = batch.len() as f32;

        let mut loss = 0.;
        for (target, feature) in batch.samples() {
            let err = target - self.predict(feature, params);
            loss += err.powi(2);
        }

        (loss + self.penalty(params)) / n
    }

    /// `(sum(2 * x * (y - y_pred)) + penalty) / n`.
    ///
    /// The raw penalty value is added, not its derivative.
    pub fn compute_grad_w(&self, batch: BatchView<'_>, params: &Params) -> f32 {
        let n = batch.len() as f32;

        let mut grad_w = 0.;
        for (target, feature) in batch.samples() {
            grad_w += 2. * feature * (target - self.predict(feature, params));
        }

        (grad_w + self.penalty(params)) / n
    }

    /// `sum(2 * (y - y_pred)) / n`. The bias is never penalized.
    pub fn compute_grad_b(&self, batch: BatchView<'_>, params: &Params) -> f32 {
        let n = batch.len() as f32;

        let mut grad_b = 0.;
        for (target, feature) in batch.samples() {
            grad_b += 2. * (target - self.predict(feature, params));
        }

        grad_b / n
    }
}

impl Model for Neuron {
    fn loss(&self, batch: BatchView<'_>, params: &Params) -> f32 {
        self.compute_loss(batch, params)
    }

    fn grad(&self, batch: BatchView<'_>, params: &Params) -> Params {
        Params {
            weight: self.compute_grad_w(batch, params),
            bias: self.compute_grad_b(batch, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn reference() -> Dataset {
        Dataset::new(vec![1., 2., 3., 4., 5.], vec![1.5, 2., 3.1, 4.1, 5.6]).unwrap()
    }

    #[test]
    fn predict_applies_the_activation_to_the_linear_output() {
        let params = Params::new(2., -1.);

        assert_eq!(Neuron::new(ActFn::Relu, RegFn::L1, 0.).predict(3., &params), 5.);
        assert_eq!(Neuron::new(ActFn::Relu, RegFn::L1, 0.).predict(0., &params), 0.);
        assert_eq!(
            Neuron::new(ActFn::Tanh, RegFn::L1, 0.).predict(0.5, &params),
            0.
        );
    }

    #[test]
    fn loss_at_zero_params_is_mean_squared_target() {
        let ds = reference();
        let neuron = Neuron::new(ActFn::Relu, RegFn::L1, 0.01);

        let loss = neuron.compute_loss(ds.view(), &Params::default());

        assert!((loss - 11.).abs() < 1e-6);
    }

    #[test]
    fn loss_divides_the_penalty_by_n_once() {
        let ds = Dataset::new(vec![0., 0.], vec![0., 0.]).unwrap();
        let neuron = Neuron::new(ActFn::Relu, RegFn::L2, 0.5);

        // No data error, so only the penalty remains: 0.5 * 2^2 / 2.
        let loss = neuron.compute_loss(ds.view(), &Params::new(2., 0.));

        assert!((loss - 1.).abs() < 1e-6);
    }

    #[test]
    fn grad_w_adds_the_raw_penalty_once() {
        let ds = Dataset::new(vec![3., 5.], vec![1., 2.]).unwrap();
        let params = Params::new(1., 0.);
        let neuron = Neuron::new(ActFn::Relu, RegFn::L1, 0.1);

        // preds [1, 2], residuals [2, 3] -> 2*1*2 + 2*2*3 = 16, + 0.1*|1| = 16.1, / 2
        let grad_w = neuron.compute_grad_w(ds.view(), &params);

        assert!((grad_w - 8.05).abs() < 1e-5);
    }

    #[test]
    fn grad_b_ignores_the_penalty() {
        let ds = Dataset::new(vec![3., 5.], vec![1., 2.]).unwrap();
        let params = Params::new(1., 0.);

        let plain = Neuron::new(ActFn::Relu, RegFn::L1, 0.);
        let heavy = Neuron::new(ActFn::Relu, RegFn::L2, 100.);

        // residuals [2, 3] -> 2*2 + 2*3 = 10, / 2
        assert!((plain.compute_grad_b(ds.view(), &params) - 5.).abs() < 1e-6);
        assert_eq!(
            plain.compute_grad_b(ds.view(), &params),
            heavy.compute_grad_b(ds.view(), &params)
        );
    }

    #[test]
    fn grad_b_matches_numerical_derivative_of_loss() {
        let ds = reference();
        let neuron = Neuron::new(ActFn::Relu, RegFn::L1, 0.);
        // Every prediction stays positive, so relu acts as the identity.
        let params = Params::new(0.8, 0.3);
        let h = 1e-2;

        let up = neuron.compute_loss(ds.view(), &Params::new(params.weight, params.bias + h));
        let down = neuron.compute_loss(ds.view(), &Params::new(params.weight, params.bias - h));
        let numerical = (up - down) / (2. * h);

        // The residual is taken as `target - prediction`, so the raw term is the negated slope.
        let grad_b = neuron.compute_grad_b(ds.view(), &params);

        assert!(
            (grad_b + numerical).abs() < 1e-2,
            "grad_b {grad_b}, numerical {numerical}"
        );
    }

    #[test]
    fn grad_bundles_both_components() {
        let ds = reference();
        let neuron = Neuron::new(ActFn::Sigmoid, RegFn::L2, 0.01);
        let params = Params::new(0.4, -0.2);

        let grad = neuron.grad(ds.view(), &params);

        assert_eq!(grad.weight, neuron.compute_grad_w(ds.view(), &params));
        assert_eq!(grad.bias, neuron.compute_grad_b(ds.view(), &params));
        assert_eq!(neuron.loss(ds.view(), &params), neuron.compute_loss(ds.view(), &params));
    }

    #[test]
    fn non_finite_params_propagate() {
        let ds = reference();
        let neuron = Neuron::new(ActFn::Relu, RegFn::L1, 0.01);
        let params = Params::new(f32::NAN, 0.);

        assert!(neuron.compute_loss(ds.view(), &params).is_nan());
        assert!(neuron.compute_grad_w(ds.view(), &params).is_nan());
        assert!(neuron.compute_grad_b(ds.view(), &params).is_nan());
    }
}
