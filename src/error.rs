//! Errors surfaced by the tree.
//!
//! Lookups that miss are not errors: `find` answers `false`, `height` and `depth` answer
//! `-1`, and `insert`/`delete` simply report whether anything changed. The only faults are
//! the ones below.

use thiserror::Error;

/// The error type for tree operations that can fail.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum Error {
    /// A traversal was started without a visitor to call.
    #[error("Callback must be a function.")]
    InvalidCallback,
    /// A traversal order name could not be recognised.
    #[error("Unknown traversal order `{0}`.")]
    UnknownOrder(String),
}
