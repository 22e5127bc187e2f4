mod act_fn;
mod functions;
mod softmax;

pub use act_fn::ActFn;
pub use functions::{relu, sigmoid, sigmoid_derivative, tanh};
pub use softmax::softmax;
