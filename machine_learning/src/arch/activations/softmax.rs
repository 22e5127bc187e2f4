use ndarray::{Array1, ArrayView1};

/// Numerically stable softmax: shifts by the maximum before exponentiating and normalizes by the
/// sum of the exponentials.
///
/// # Arguments
/// * `xs` - The scores, expected to be non-empty. An empty view yields an empty array.
///
/// # Returns
/// A probability vector of the same length as `xs`.
pub fn softmax(xs: ArrayView1<f32>) -> Array1<f32> {
    let max = xs.fold(f32::NEG_INFINITY, |acc, &x| acc.max(x));
    let exps = xs.mapv(|x| (x - max).exp());
    let sum = exps.sum();

    exps / sum
}
