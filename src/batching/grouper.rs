//! Fixed-arity grouping with a completion policy.
//!
//! ```text
//! grouper("ABCDEFG", 3, Fill('x'))  --> ABC DEF Gxx
//! grouper("ABCDEFG", 3, Strict)     --> ABC DEF BatchError
//! grouper("ABCDEFG", 3, Ignore)     --> ABC DEF
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::BatchError;

/// What to do with a final group that comes up short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incomplete<T> {
    /// Pad the final group with copies of the given value.
    Fill(T),
    /// Report `BatchError::ShortFinalGroup`.
    Strict,
    /// Drop the final group.
    Ignore,
}

impl<T> Incomplete<T> {
    /// Builds a policy from its name. `"fill"` needs a fill value.
    pub fn from_name(name: &str, fillvalue: Option<T>) -> Result<Self, BatchError> {
        match name.parse::<PolicyName>()? {
            PolicyName::Fill => fillvalue
                .map(Incomplete::Fill)
                .ok_or(BatchError::MissingFillValue),
            PolicyName::Strict => Ok(Incomplete::Strict),
            PolicyName::Ignore => Ok(Incomplete::Ignore),
        }
    }

    pub fn name(&self) -> PolicyName {
        match self {
            Incomplete::Fill(_) => PolicyName::Fill,
            Incomplete::Strict => PolicyName::Strict,
            Incomplete::Ignore => PolicyName::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyName {
    Fill,
    Strict,
    Ignore,
}

impl FromStr for PolicyName {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill" => Ok(PolicyName::Fill),
            "strict" => Ok(PolicyName::Strict),
            "ignore" => Ok(PolicyName::Ignore),
            other => Err(BatchError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyName::Fill => "fill",
            PolicyName::Strict => "strict",
            PolicyName::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

/// Collects `iterable` into non-overlapping groups of exactly `n` items.
///
/// Every full group is yielded as `Ok`. The short final group, if any, is
/// handled by `incomplete`; only `Incomplete::Strict` ever yields an `Err`,
/// and only once, after all full groups.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn grouper<I>(iterable: I, n: usize, incomplete: Incomplete<I::Item>) -> Grouper<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    assert!(n != 0, "batch size must be non-zero");
    Grouper {
        iter: iterable.into_iter(),
        n,
        incomplete,
        finished: false,
    }
}

/// Same as [`grouper`], with the policy given by name.
///
/// Fails with `BatchError::UnknownPolicy` for anything other than `"fill"`,
/// `"strict"` or `"ignore"`.
pub fn grouper_named<I>(
    iterable: I,
    n: usize,
    incomplete: &str,
    fillvalue: Option<I::Item>,
) -> Result<Grouper<I::IntoIter>, BatchError>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let policy = Incomplete::from_name(incomplete, fillvalue)?;
    Ok(grouper(iterable, n, policy))
}

pub struct Grouper<I: Iterator> {
    iter: I,
    n: usize,
    incomplete: Incomplete<I::Item>,
    finished: bool,
}

impl<I> Iterator for Grouper<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Result<Vec<I::Item>, BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut group: Vec<I::Item> = Vec::with_capacity(self.n);
        group.extend(self.iter.by_ref().take(self.n));
        if group.len() == self.n {
            return Some(Ok(group));
        }

        self.finished = true;
        if group.is_empty() {
            return None;
        }

        match &self.incomplete {
            Incomplete::Fill(fillvalue) => {
                group.resize(self.n, fillvalue.clone());
                Some(Ok(group))
            }
            Incomplete::Strict => Some(Err(BatchError::ShortFinalGroup {
                expected: self.n,
                found: group.len(),
            })),
            Incomplete::Ignore => None,
        }
    }
}
