//! Library baseline: `itertools` chunking.

use itertools::Itertools;

/// Splits `iterable` into batches of `n` using [`Itertools::chunks`].
///
/// `IntoChunks` can only be iterated by reference, so the batches are
/// collected eagerly.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn chunked<I: IntoIterator>(iterable: I, n: usize) -> Vec<Vec<I::Item>> {
    assert!(n != 0, "batch size must be non-zero");
    let mut batches = Vec::new();
    for chunk in &iterable.into_iter().chunks(n) {
        batches.push(chunk.collect());
    }
    batches
}
