use std::fmt;

use crate::arch::Params;

/// A snapshot of the training taken on a reporting epoch. The loss is measured over the whole
/// dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    pub loss: f32,
    pub weight: f32,
    pub bias: f32,
}

impl fmt::Display for EpochReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            epoch,
            loss,
            weight,
            bias,
        } = self;

        write!(f, "epoch: {epoch}, loss: {loss}, weight: {weight}, bias: {bias}")
    }
}

/// The outcome of a full training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub params: Params,
    pub reports: Vec<EpochReport>,
}

impl TrainReport {
    /// The last loss that was reported, if any.
    pub fn last_loss(&self) -> Option<f32> {
        self.reports.last().map(|r| r.loss)
    }
}
