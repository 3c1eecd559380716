//! # Batching strategies and abstract protocols
//!
//! Two independent units:
//!
//! ## Batching
//! - `batching`: four ways to split a sequence into fixed-size batches
//!   (accumulate-and-flush, slice-via-cursor, fixed-arity grouping with a
//!   completion policy, and `itertools` chunking as the library baseline)
//! - `bench`: wall-clock timing of all four over the same input
//! - `config`: benchmark parameters, optionally read from TOML
//!
//! ## Abstract protocols
//! - `tombola`: a container trait with required `load`/`pick` and provided
//!   `inspect`/`loaded`, plus an override that explicitly calls the abstract
//!   `pick` body
//! - `registry`: inherited versus registered ("virtual") subclasses
//!
//! Run the demos with: `cargo run --bin <name>`

pub mod batching;
pub mod bench;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod tombola;

pub use error::{AbcError, BatchError, ConfigError, LookupError};
