use crate::arch::Params;

pub trait Optimizer {
    /// Moves `params` one step according to `grad`.
    fn update_params(&mut self, params: &mut Params, grad: &Params);
}
