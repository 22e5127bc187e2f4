use super::{Trainer, TrainingConfig};
use crate::{
    arch::{Model, Neuron},
    data::Dataset,
    error::Result,
    optimization::{GradientDescent, Optimizer},
};

/// Builds `Trainer`s given a configuration.
#[derive(Default)]
pub struct TrainerBuilder;

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Trainer` following a configuration.
    ///
    /// # Arguments
    /// * `config` - The hyperparameters of the run.
    /// * `dataset` - The data the trainer will own.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the configuration is out of bounds.
    pub fn build(
        &self,
        config: &TrainingConfig,
        dataset: Dataset,
    ) -> Result<Trainer<Neuron, GradientDescent>> {
        config.validate()?;

        let model = self.resolve_model(config);
        let optimizer = self.resolve_optimizer(config);
        self.terminate_build(config, model, optimizer, dataset)
    }

    fn resolve_model(&self, config: &TrainingConfig) -> Neuron {
        Neuron::new(config.act_fn, config.reg_fn, config.lambda)
    }

    fn resolve_optimizer(&self, config: &TrainingConfig) -> GradientDescent {
        GradientDescent::new(config.learning_rate)
    }

    fn terminate_build<M, O>(
        &self,
        config: &TrainingConfig,
        model: M,
        optimizer: O,
        dataset: Dataset,
    ) -> Result<Trainer<M, O>>
    where
        M: Model,
        O: Optimizer,
    {
        Trainer::new(
            model,
            optimizer,
            dataset,
            config.epochs,
            config.batch_size,
            config.report_every,
        )
    }
}
