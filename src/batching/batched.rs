//! Slice-via-cursor batching.

/// Repeatedly takes the next `n` items off a single cursor until a take
/// comes back empty. The last batch may be shorter than `n`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn batched<I: IntoIterator>(iterable: I, n: usize) -> impl Iterator<Item = Vec<I::Item>> {
    assert!(n != 0, "batch size must be non-zero");
    let mut cursor = iterable.into_iter();

    std::iter::from_fn(move || {
        let batch: Vec<I::Item> = cursor.by_ref().take(n).collect();
        (!batch.is_empty()).then_some(batch)
    })
}
