pub mod activations;
mod model;
mod neuron;
mod params;
pub mod regularization;

pub use model::Model;
pub use neuron::Neuron;
pub use params::Params;
