//! Single-neuron regression trained with mini-batch gradient descent.

pub mod arch;
pub mod data;
pub mod error;
pub mod optimization;
pub mod storage;
pub mod training;

pub use error::{MlErr, Result, StorageErr};
