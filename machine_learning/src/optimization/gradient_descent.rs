use super::Optimizer;
use crate::arch::Params;

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params(&mut self, params: &mut Params, grad: &Params) {
        let lr = self.learning_rate;

        params.weight -= lr * grad.weight;
        params.bias -= lr * grad.bias;
    }
}
