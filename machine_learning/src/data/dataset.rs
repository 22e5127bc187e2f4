use std::fmt;

use ndarray::{Array1, ArrayView1, s};

use crate::error::{MlErr, Result};

/// An in-memory regression dataset made of two parallel arrays.
///
/// The names follow the data files this trainer was built for and are inverted with respect to the
/// usual convention:
/// * `input` holds the **targets**, the values the neuron is fitted to.
/// * `output` holds the **features**, the values multiplied by the weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    input: Array1<f32>,
    output: Array1<f32>,
}

impl Dataset {
    /// Creates a new dataset from owned buffers.
    ///
    /// # Arguments
    /// * `input` - The targets.
    /// * `output` - The features, same length as `input`.
    ///
    /// # Errors
    /// `DataShapeMismatch` if the lengths differ, `InvalidConfiguration` if both are empty.
    pub fn new(input: Vec<f32>, output: Vec<f32>) -> Result<Self> {
        if input.len() != output.len() {
            return Err(MlErr::DataShapeMismatch {
                a: "output",
                b: "input",
                got: output.len(),
                expected: input.len(),
            });
        }

        if input.is_empty() {
            return Err(MlErr::InvalidConfiguration {
                what: "dataset",
                reason: "dataset must be non-empty",
            });
        }

        Ok(Self {
            input: Array1::from(input),
            output: Array1::from(output),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    #[inline]
    pub fn input(&self) -> ArrayView1<'_, f32> {
        self.input.view()
    }

    #[inline]
    pub fn output(&self) -> ArrayView1<'_, f32> {
        self.output.view()
    }

    /// Returns the whole dataset as a single batch.
    pub fn view(&self) -> BatchView<'_> {
        self.slice(0, self.len())
    }

    /// Borrows the samples in `[start, end)` of both arrays. Callers clamp the range.
    pub(super) fn slice(&self, start: usize, end: usize) -> BatchView<'_> {
        BatchView {
            input: self.input.slice(s![start..end]),
            output: self.output.slice(s![start..end]),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input: {}, output: {}", self.input, self.output)
    }
}

/// Borrowed contiguous window over both arrays of a `Dataset` (zero-copy).
#[derive(Debug, Clone, Copy)]
pub struct BatchView<'a> {
    pub input: ArrayView1<'a, f32>,
    pub output: ArrayView1<'a, f32>,
}

impl<'a> BatchView<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Iterates the `(target, feature)` pairs of the window.
    pub fn samples(&self) -> impl Iterator<Item = (f32, f32)> + 'a {
        self.input.into_iter().copied().zip(self.output.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_rejects_mismatched_lengths() {
        let err = Dataset::new(vec![1., 2., 3.], vec![1., 2.]).unwrap_err();

        assert!(matches!(
            err,
            MlErr::DataShapeMismatch {
                got: 2,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn dataset_rejects_empty_arrays() {
        let err = Dataset::new(vec![], vec![]).unwrap_err();

        assert!(matches!(err, MlErr::InvalidConfiguration { .. }));
    }

    #[test]
    fn samples_pair_targets_with_features() {
        let ds = Dataset::new(vec![1., 2., 3.], vec![10., 20., 30.]).unwrap();
        let pairs: Vec<_> = ds.view().samples().collect();

        assert_eq!(pairs, vec![(1., 10.), (2., 20.), (3., 30.)]);
    }

    #[test]
    fn display_lists_both_arrays() {
        let ds = Dataset::new(vec![1., 2.], vec![1.5, 2.]).unwrap();
        let shown = ds.to_string();

        assert!(shown.starts_with("input: [1, 2]"));
        assert!(shown.contains("output: [1.5, 2]"));
    }
}
