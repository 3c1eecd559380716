//! Four ways to split a sequence into fixed-size batches.
//!
//! | strategy         | mechanism                          | short final batch       |
//! |------------------|------------------------------------|-------------------------|
//! | `batch_iterator` | buffer, flushed whenever it fills  | yielded as-is           |
//! | `batched`        | `take(n)` from one cursor          | yielded as-is           |
//! | `grouper`        | exactly `n` per group              | fill / strict / ignore  |
//! | `chunked`        | `itertools::Itertools::chunks`     | yielded as-is           |

mod batch_iterator;
mod batched;
mod chunked;
mod grouper;

pub use batch_iterator::{batch_iterator, BatchIterator};
pub use batched::batched;
pub use chunked::chunked;
pub use grouper::{grouper, grouper_named, Grouper, Incomplete, PolicyName};
