//! Error types for index construction.

use thiserror::Error;

/// The text is too long for the configured index width.
///
/// Both index structures address the text with a caller-chosen unsigned
/// integer type. Every offset in `0..len` and the not-found sentinel `len`
/// itself must be representable, so a text may hold at most `max` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("text length {len} exceeds index capacity {max}")]
pub struct CapacityError {
    /// Length the text would have reached.
    pub len: usize,
    /// Largest length the index type can address.
    pub max: usize,
}
