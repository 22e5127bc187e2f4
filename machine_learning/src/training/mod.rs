mod builder;
mod config;
mod report;
mod trainer;

pub use builder::TrainerBuilder;
pub use config::TrainingConfig;
pub use report::{EpochReport, TrainReport};
pub use trainer::{TrainState, Trainer};
