use super::Params;
use crate::data::BatchView;

pub trait Model {
    /// Computes the loss of the model over `batch` at `params`.
    fn loss(&self, batch: BatchView<'_>, params: &Params) -> f32;

    /// Computes the gradient of the loss with respect to `params` over `batch`.
    fn grad(&self, batch: BatchView<'_>, params: &Params) -> Params;
}
