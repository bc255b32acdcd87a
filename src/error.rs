//! Errors reported when building collections from runtime sequences.

use thiserror::Error;

/// Result type for the fallible constructors in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a collection literal at runtime.
///
/// The literal macros never produce these, since their argument lists are
/// checked at compile time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An interleaved key/object sequence ended on a key with no object.
    #[error("expected alternating keys and objects, got an odd number of elements ({len})")]
    OddLength {
        /// Number of elements in the rejected sequence.
        len: usize,
    },
}
