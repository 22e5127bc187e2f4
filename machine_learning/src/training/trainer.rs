use std::num::NonZeroUsize;

use log::{debug, info};

use super::{EpochReport, TrainReport};
use crate::{
    arch::{Model, Params},
    data::{Dataset, MiniBatch},
    error::{MlErr, Result},
    optimization::Optimizer,
};

/// The phases a `Trainer` goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainState {
    Initializing,
    EpochRunning,
    Reporting,
    Done,
}

/// A model `Trainer`. Owns the dataset and the parameters being fitted, and runs a fixed amount of
/// epochs of mini-batch gradient descent over them.
pub struct Trainer<M, O>
where
    M: Model,
    O: Optimizer,
{
    model: M,
    optimizer: O,
    dataset: Dataset,
    params: Params,

    epochs: usize,
    batch_size: NonZeroUsize,
    report_every: NonZeroUsize,

    epoch: usize,
    state: TrainState,
    reports: Vec<EpochReport>,
}

impl<M, O> Trainer<M, O>
where
    M: Model,
    O: Optimizer,
{
    /// Returns a new `Trainer` with both parameters at zero.
    ///
    /// # Arguments
    /// * `model` - The model that will be trained.
    /// * `optimizer` - Dictates how the parameters move on each batch.
    /// * `dataset` - The dataset the model will be trained with.
    /// * `epochs` - The amount of passes over the dataset.
    /// * `batch_size` - The amount of samples per gradient step.
    /// * `report_every` - The loss is measured on every epoch multiple of this.
    ///
    /// # Errors
    /// `InvalidConfiguration` if any of the counts is zero.
    pub fn new(
        model: M,
        optimizer: O,
        dataset: Dataset,
        epochs: usize,
        batch_size: usize,
        report_every: usize,
    ) -> Result<Self> {
        let batch_size = NonZeroUsize::new(batch_size).ok_or(MlErr::InvalidConfiguration {
            what: "batch_size",
            reason: "batch size must be a positive integer",
        })?;

        if epochs == 0 {
            return Err(MlErr::InvalidConfiguration {
                what: "epochs",
                reason: "at least one epoch is required",
            });
        }

        let report_every = NonZeroUsize::new(report_every).ok_or(MlErr::InvalidConfiguration {
            what: "report_every",
            reason: "the report interval must be positive",
        })?;

        Ok(Self {
            model,
            optimizer,
            dataset,
            params: Params::default(),
            epochs,
            batch_size,
            report_every,
            epoch: 0,
            state: TrainState::Initializing,
            reports: Vec::with_capacity(epochs.div_ceil(report_every.get())),
        })
    }

    pub fn state(&self) -> TrainState {
        self.state
    }

    pub fn params(&self) -> Params {
        self.params
    }

    /// The index of the next epoch to run.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn reports(&self) -> &[EpochReport] {
        &self.reports
    }

    /// Computes the loss over the entire dataset at the current parameters.
    pub fn loss(&self) -> f32 {
        self.model.loss(self.dataset.view(), &self.params)
    }

    /// Runs a single epoch: one optimizer step per full mini-batch, in order, each step seeing the
    /// parameters left by the previous one. Reports the full-dataset loss afterwards when the
    /// epoch is a multiple of the report interval.
    ///
    /// # Returns
    /// The epoch's report if one was taken. `None` once the trainer is done.
    pub fn run_epoch(&mut self) -> Result<Option<EpochReport>> {
        if self.state == TrainState::Done {
            return Ok(None);
        }

        self.state = TrainState::EpochRunning;
        let epoch = self.epoch;

        let Self {
            model,
            optimizer,
            dataset,
            params,
            batch_size,
            ..
        } = self;

        let batches = MiniBatch::new(dataset, batch_size.get())?;
        batches.iterate_batches(|i, batch| {
            let grad = model.grad(batch, params);
            optimizer.update_params(params, &grad);
            debug!("epoch {epoch} batch {i}: grad ({grad}), params ({params})");
        });

        let mut report = None;
        if epoch % self.report_every.get() == 0 {
            self.state = TrainState::Reporting;

            let r = EpochReport {
                epoch,
                loss: self.loss(),
                weight: self.params.weight,
                bias: self.params.bias,
            };
            info!("{r}");

            self.reports.push(r);
            report = Some(r);
        }

        self.epoch += 1;
        self.state = if self.epoch == self.epochs {
            TrainState::Done
        } else {
            TrainState::EpochRunning
        };

        Ok(report)
    }

    /// Runs every remaining epoch.
    ///
    /// # Returns
    /// The final parameters together with every report taken.
    pub fn run(&mut self) -> Result<TrainReport> {
        if self.state == TrainState::Initializing {
            info!(
                "training for {} epochs over {} samples, batch size {}",
                self.epochs,
                self.dataset.len(),
                self.batch_size
            );
        }

        while self.state != TrainState::Done {
            self.run_epoch()?;
        }

        info!("final {}", self.params);
        Ok(self.report())
    }

    pub fn report(&self) -> TrainReport {
        TrainReport {
            params: self.params,
            reports: self.reports.clone(),
        }
    }
}
