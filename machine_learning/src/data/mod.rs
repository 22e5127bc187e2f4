mod batcher;
mod dataset;

pub use batcher::MiniBatch;
pub use dataset::{BatchView, Dataset};
