use std::fmt;

/// The trainable state of a single neuron. Also used to carry its gradient, `dL/dw` in `weight`
/// and `dL/db` in `bias`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Params {
    pub weight: f32,
    pub bias: f32,
}

impl Params {
    pub fn new(weight: f32, bias: f32) -> Self {
        Self { weight, bias }
    }

    /// Whether both values are finite.
    pub fn is_finite(&self) -> bool {
        self.weight.is_finite() && self.bias.is_finite()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weight: {}, bias: {}", self.weight, self.bias)
    }
}
