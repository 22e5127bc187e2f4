use serde::{Deserialize, Serialize};

use crate::{
    arch::{activations::ActFn, regularization::RegFn},
    error::{MlErr, Result},
};

/// Hyperparameters of one training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TrainingConfig {
    /// Step length of gradient descent (eta).
    pub learning_rate: f32,
    pub epochs: usize,
    /// Coefficient of the weight penalty.
    pub lambda: f32,
    pub batch_size: usize,
    pub act_fn: ActFn,
    pub reg_fn: RegFn,
    /// The loss is reported on every epoch multiple of this.
    pub report_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.0001,
            epochs: 1000,
            lambda: 0.01,
            batch_size: 2,
            act_fn: ActFn::Relu,
            reg_fn: RegFn::L1,
            report_every: 10,
        }
    }
}

impl TrainingConfig {
    /// Checks the bounds that can be checked without the dataset.
    ///
    /// # Errors
    /// `InvalidConfiguration` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |what, reason| Err(MlErr::InvalidConfiguration { what, reason });

        if self.batch_size == 0 {
            return invalid("batch_size", "batch size must be a positive integer");
        }
        if self.epochs == 0 {
            return invalid("epochs", "at least one epoch is required");
        }
        if self.report_every == 0 {
            return invalid("report_every", "the report interval must be positive");
        }

        Ok(())
    }
}
