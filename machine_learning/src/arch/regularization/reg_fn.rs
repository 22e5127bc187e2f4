use std::fmt;

use serde::{Deserialize, Serialize};

use super::{l1, l2};

/// The penalty charged on the neuron's weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegFn {
    #[default]
    L1,
    L2,
}

impl RegFn {
    pub fn penalty(&self, weight: f32, lambda: f32) -> f32 {
        match self {
            RegFn::L1 => l1(weight, lambda),
            RegFn::L2 => l2(weight, lambda),
        }
    }
}

impl fmt::Display for RegFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegFn::L1 => write!(f, "l1"),
            RegFn::L2 => write!(f, "l2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reg_fn_dispatches_to_the_named_penalty() {
        assert_eq!(RegFn::L1.penalty(-3., 0.5), 1.5);
        assert_eq!(RegFn::L2.penalty(-3., 0.5), 4.5);
    }

    #[test]
    fn reg_fn_reads_snake_case_names() {
        let reg_fn: RegFn = serde_json::from_str("\"l2\"").unwrap();

        assert_eq!(reg_fn, RegFn::L2);
        assert_eq!(RegFn::L1.to_string(), "l1");
    }
}
