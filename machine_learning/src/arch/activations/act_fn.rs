use std::fmt;

use serde::{Deserialize, Serialize};

use super::{relu, sigmoid, tanh};

/// The activation applied to the neuron's linear output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFn {
    #[default]
    Relu,
    Sigmoid,
    Tanh,
}
use ActFn::*;

impl ActFn {
    pub fn f(&self, x: f32) -> f32 {
        match self {
            Relu => relu(x),
            Sigmoid => sigmoid(x),
            Tanh => tanh(x),
        }
    }
}

impl fmt::Display for ActFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relu => "relu",
            Sigmoid => "sigmoid",
            Tanh => "tanh",
        };

        write!(f, "{name}")
    }
}
