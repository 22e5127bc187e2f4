mod penalties;
mod reg_fn;

pub use penalties::{l1, l2};
pub use reg_fn::RegFn;
