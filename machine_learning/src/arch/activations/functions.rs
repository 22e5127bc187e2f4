/// The logistic function, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f32) -> f32 {
    1. / (1. + (-x).exp())
}

/// `max(0, x)`, letting NaN through.
pub fn relu(x: f32) -> f32 {
    if x < 0. { 0. } else { x }
}

pub fn tanh(x: f32) -> f32 {
    x.tanh()
}

/// Derivative of the sigmoid expressed through its output.
///
/// # Arguments
/// * `s` - An *already activated* value, that is `sigmoid(z)`, not `z` itself.
pub fn sigmoid_derivative(s: f32) -> f32 {
    s * (1. - s)
}
