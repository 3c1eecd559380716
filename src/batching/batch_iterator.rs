//! Accumulate-and-flush batching.

use std::mem;

/// Lazily groups `iterable` into batches of `n` items.
///
/// Items are pushed into a buffer; every time the buffer fills up it is
/// swapped out with `mem::replace` and yielded. Whatever is left in the buffer
/// when the source runs dry comes out as a final, shorter batch.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn batch_iterator<I: IntoIterator>(iterable: I, n: usize) -> BatchIterator<I::IntoIter> {
    assert!(n != 0, "batch size must be non-zero");
    BatchIterator {
        iter: iterable.into_iter(),
        n,
        buffer: Vec::with_capacity(n),
    }
}

pub struct BatchIterator<I: Iterator> {
    iter: I,
    n: usize,
    buffer: Vec<I::Item>,
}

impl<I: Iterator> Iterator for BatchIterator<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            self.buffer.push(item);
            if self.buffer.len() == self.n {
                return Some(mem::replace(&mut self.buffer, Vec::with_capacity(self.n)));
            }
        }

        // Ragged tail
        if self.buffer.is_empty() {
            None
        } else {
            Some(mem::take(&mut self.buffer))
        }
    }
}
