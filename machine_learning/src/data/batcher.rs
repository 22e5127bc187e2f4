use std::num::NonZeroUsize;

use super::{BatchView, Dataset};
use crate::error::{MlErr, Result};

/// Partitions a `Dataset` into contiguous windows of a fixed size.
///
/// Only `len / size` (truncating) batches are ever iterated, the trailing remainder is dropped.
#[derive(Debug, Clone, Copy)]
pub struct MiniBatch<'a> {
    dataset: &'a Dataset,
    size: NonZeroUsize,
    num_batches: usize,
}

impl<'a> MiniBatch<'a> {
    /// Returns a new `MiniBatch`.
    ///
    /// # Arguments
    /// * `dataset` - The data to partition.
    /// * `size` - The amount of samples per batch.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `size` is zero.
    pub fn new(dataset: &'a Dataset, size: usize) -> Result<Self> {
        let size = NonZeroUsize::new(size).ok_or(MlErr::InvalidConfiguration {
            what: "batch_size",
            reason: "batch size must be a positive integer",
        })?;

        Ok(Self {
            dataset,
            size,
            num_batches: dataset.len() / size,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    #[inline]
    pub fn num_batches(&self) -> usize {
        self.num_batches
    }

    /// Returns the window for `batch_idx`, clamped to the end of the dataset.
    ///
    /// `batch_idx == num_batches()` yields the trailing remainder (possibly empty), anything past
    /// that yields `None`.
    pub fn get_batch(&self, batch_idx: usize) -> Option<BatchView<'a>> {
        let len = self.dataset.len();
        let start = batch_idx.checked_mul(self.size.get())?;
        if start > len {
            return None;
        }

        let end = start.saturating_add(self.size.get()).min(len);
        Some(self.dataset.slice(start, end))
    }

    /// Iterates the full batches in increasing index order.
    pub fn batches(&self) -> impl Iterator<Item = BatchView<'a>> {
        let this = *self;
        (0..this.num_batches).filter_map(move |i| this.get_batch(i))
    }

    /// Calls `visit` once per full batch, in order, passing the batch index and its window.
    pub fn iterate_batches<F>(&self, mut visit: F)
    where
        F: FnMut(usize, BatchView<'a>),
    {
        for (i, batch) in self.batches().enumerate() {
            visit(i, batch);
        }
    }
}
