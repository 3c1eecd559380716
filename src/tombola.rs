//! A container protocol with two required methods and two provided ones.
//!
//! `load` and `pick` are the required capability set. `inspect` is built on
//! top of them: it drains the container through `pick` until it reports
//! [`LookupError`], then puts everything back with `load`. `loaded` lives on
//! [`TombolaExt`], which every tombola gets through a blanket impl, so it is
//! always derived from `inspect` and can't be replaced.

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::LookupError;

pub trait Tombola {
    type Item;

    /// Adds every item from `items`.
    fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Self::Item>;

    /// Removes one item and returns it. Which item is up to the
    /// implementation.
    ///
    /// Fails with [`LookupError`] when the container is empty.
    fn pick(&mut self) -> Result<Self::Item, LookupError>;

    /// Returns the items currently inside, in the order `pick` handed them
    /// out. The contents are the same afterwards.
    fn inspect(&mut self) -> Box<[Self::Item]>
    where
        Self::Item: Clone,
    {
        let mut items = Vec::new();
        while let Ok(item) = self.pick() {
            items.push(item);
        }
        self.load(items.iter().cloned());
        items.into_boxed_slice()
    }
}

pub trait TombolaExt: Tombola {
    /// `true` if there is at least one item inside.
    fn loaded(&mut self) -> bool
    where
        Self::Item: Clone;
}

impl<T: Tombola + ?Sized> TombolaExt for T {
    fn loaded(&mut self) -> bool
    where
        Self::Item: Clone,
    {
        !self.inspect().is_empty()
    }
}

/// The body that sits behind the abstract `pick`.
///
/// Implementors still have to write their own `pick`; an override can call
/// this explicitly to run it first. It only reports that it ran.
pub fn abstract_pick<T: Tombola + ?Sized>(_tombola: &T) {
    info!("inside abstract pick");
}

// ============================================================================
// MyTombola: an override that calls the abstract body first
// ============================================================================

/// Keeps nothing: `load` discards its input, so `pick` always runs the
/// abstract body, reports itself, and comes back empty.
#[derive(Debug, Default)]
pub struct MyTombola;

impl Tombola for MyTombola {
    type Item = u32;

    fn load<I>(&mut self, _items: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
    }

    fn pick(&mut self) -> Result<Self::Item, LookupError> {
        abstract_pick(&*self);
        info!("inside MyTombola pick");
        Err(LookupError::new("MyTombola"))
    }
}

// ============================================================================
// BingoCage: shuffle on load, pop on pick
// ============================================================================

pub struct BingoCage<T, R = StdRng> {
    items: Vec<T>,
    rng: R,
}

impl<T> BingoCage<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }

    /// A cage whose shuffles are reproducible.
    pub fn seeded<I: IntoIterator<Item = T>>(items: I, seed: u64) -> Self {
        Self::with_rng(items, StdRng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> BingoCage<T, R> {
    pub fn with_rng<I: IntoIterator<Item = T>>(items: I, rng: R) -> Self {
        let mut cage = Self {
            items: Vec::new(),
            rng,
        };
        cage.load(items);
        cage
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T, R: Rng> Tombola for BingoCage<T, R> {
    type Item = T;

    fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self.items.shuffle(&mut self.rng);
    }

    fn pick(&mut self) -> Result<T, LookupError> {
        self.items.pop().ok_or(LookupError::new("BingoCage"))
    }
}

// ============================================================================
// LottoBlower: pick from a random position
// ============================================================================

pub struct LottoBlower<T, R = StdRng> {
    balls: Vec<T>,
    rng: R,
}

impl<T> LottoBlower<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }

    pub fn seeded<I: IntoIterator<Item = T>>(items: I, seed: u64) -> Self {
        Self::with_rng(items, StdRng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> LottoBlower<T, R> {
    pub fn with_rng<I: IntoIterator<Item = T>>(items: I, rng: R) -> Self {
        Self {
            balls: items.into_iter().collect(),
            rng,
        }
    }
}

impl<T, R: Rng> Tombola for LottoBlower<T, R> {
    type Item = T;

    fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.balls.extend(items);
    }

    fn pick(&mut self) -> Result<T, LookupError> {
        if self.balls.is_empty() {
            return Err(LookupError::new("LottoBlower"));
        }
        let position = self.rng.gen_range(0..self.balls.len());
        Ok(self.balls.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut items = items.to_vec();
        items.sort();
        items
    }

    /// Test-only logger that keeps each thread's messages, so parallel tests
    /// don't see each other's lines.
    mod capture {
        use std::cell::RefCell;
        use std::sync::Once;

        use log::{LevelFilter, Log, Metadata, Record};

        thread_local! {
            static LINES: RefCell<Vec<String>> = RefCell::new(Vec::new());
        }

        struct CaptureLogger;

        impl Log for CaptureLogger {
            fn enabled(&self, _metadata: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                LINES.with(|lines| lines.borrow_mut().push(record.args().to_string()));
            }

            fn flush(&self) {}
        }

        static LOGGER: CaptureLogger = CaptureLogger;
        static INIT: Once = Once::new();

        /// Runs `f` and returns everything it logged, in order.
        pub fn logged_by<F: FnOnce()>(f: F) -> Vec<String> {
            INIT.call_once(|| {
                log::set_logger(&LOGGER).expect("no other logger in unit tests");
                log::set_max_level(LevelFilter::Trace);
            });
            LINES.with(|lines| lines.borrow_mut().clear());
            f();
            LINES.with(|lines| lines.borrow_mut().drain(..).collect())
        }
    }

    #[test]
    fn test_my_tombola_pick_reaches_abstract_body_then_fails() {
        let mut tombola = MyTombola;
        assert_eq!(tombola.pick(), Err(LookupError::new("MyTombola")));
    }

    #[test]
    fn test_my_tombola_pick_runs_abstract_body_first() {
        let lines = capture::logged_by(|| {
            let _ = MyTombola.pick();
        });
        assert_eq!(lines, ["inside abstract pick", "inside MyTombola pick"]);
    }

    #[test]
    fn test_abstract_pick_logs_its_diagnostic() {
        let lines = capture::logged_by(|| abstract_pick(&BingoCage::seeded([1], 0)));
        assert_eq!(lines, ["inside abstract pick"]);
    }

    #[test]
    fn test_bingo_cage_pick_never_reaches_abstract_body() {
        let lines = capture::logged_by(|| {
            let _ = BingoCage::seeded([1, 2], 0).pick();
        });
        assert!(lines.is_empty());
    }

    #[test]
    fn test_my_tombola_is_never_loaded() {
        let mut tombola = MyTombola;
        tombola.load([1, 2, 3]);
        assert!(!tombola.loaded());
        assert!(tombola.inspect().is_empty());
    }

    #[test]
    fn test_pick_from_empty_cage() {
        let mut cage = BingoCage::<i32>::seeded([], 7);
        let err = cage.pick().unwrap_err();
        assert_eq!(err.to_string(), "pick from empty BingoCage");
    }

    #[test]
    fn test_cage_picks_every_item_once() {
        let mut cage = BingoCage::seeded(1..=10, 42);
        let mut picked: Vec<_> = std::iter::from_fn(|| cage.pick().ok()).collect();
        picked.sort();
        assert_eq!(picked, (1..=10).collect::<Vec<_>>());
        assert!(cage.is_empty());
    }

    #[test]
    fn test_inspect_restores_contents() {
        let mut cage = BingoCage::seeded(["a", "b", "c"], 1);
        let first = cage.inspect();
        assert_eq!(cage.len(), 3);
        assert_eq!(sorted(&first), vec!["a", "b", "c"]);
        assert!(cage.loaded());
    }

    #[test]
    fn test_inspect_swallows_lookup_error() {
        let mut cage = BingoCage::<u8>::seeded([], 3);
        assert!(cage.inspect().is_empty());
        assert!(!cage.loaded());
        assert!(cage.pick().is_err());
    }

    #[test]
    fn test_lotto_blower_empty() {
        let mut blower = LottoBlower::<char>::seeded([], 9);
        assert_eq!(blower.pick(), Err(LookupError::new("LottoBlower")));
        assert!(!blower.loaded());
    }

    #[test]
    fn test_lotto_blower_inspect_follows_pick_order() {
        let mut inspected = LottoBlower::seeded(1..=5, 5);
        let mut picked = LottoBlower::seeded(1..=5, 5);

        let order: Vec<_> = std::iter::from_fn(|| picked.pick().ok()).collect();
        assert_eq!(&*inspected.inspect(), &order[..]);
        assert_eq!(sorted(&inspected.inspect()), vec![1, 2, 3, 4, 5]);
    }

    /// A tombola that reports nothing through `pick`; `loaded` must agree.
    struct Hollow;

    impl Tombola for Hollow {
        type Item = u8;

        fn load<I>(&mut self, _items: I)
        where
            I: IntoIterator<Item = u8>,
        {
        }

        fn pick(&mut self) -> Result<u8, LookupError> {
            Err(LookupError::new("Hollow"))
        }
    }

    #[test]
    fn test_loaded_is_derived_from_inspect() {
        let mut hollow = Hollow;
        assert_eq!(hollow.loaded(), !hollow.inspect().is_empty());

        let mut blower = LottoBlower::seeded([9, 8], 1);
        assert_eq!(blower.loaded(), !blower.inspect().is_empty());
        assert!(blower.loaded());
    }

    proptest! {
        #[test]
        fn inspect_is_idempotent_on_contents(
            loads in prop::collection::vec(prop::collection::vec(any::<i16>(), 0..20), 0..5),
            seed in any::<u64>(),
        ) {
            let mut cage = BingoCage::seeded(Vec::new(), seed);
            for batch in &loads {
                cage.load(batch.iter().copied());
            }
            let total: usize = loads.iter().map(Vec::len).sum();

            let first = cage.inspect();
            prop_assert_eq!(cage.loaded(), total > 0);
            let second = cage.inspect();

            prop_assert_eq!(first.len(), total);
            prop_assert_eq!(sorted(&first), sorted(&second));
            prop_assert_eq!(cage.len(), total);
        }

        #[test]
        fn lotto_blower_contents_survive_inspect(items in prop::collection::vec(any::<u32>(), 0..30), seed in any::<u64>()) {
            let mut blower = LottoBlower::seeded(items.clone(), seed);
            prop_assert_eq!(sorted(&blower.inspect()), sorted(&items));
            prop_assert_eq!(blower.loaded(), !items.is_empty());
        }
    }
}
