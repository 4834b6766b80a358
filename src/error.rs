//! Error types for cellweave.

use thiserror::Error;

/// Errors from invalid automaton configuration.
///
/// All generation entry points validate their configuration up front and
/// return one of these instead of producing a silently wrong grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Alphabet size must allow at least two states.
    #[error("base must be at least 2, got {0}")]
    InvalidBase(u64),

    /// Neighborhood radius must cover at least the adjacent cells.
    #[error("radius must be at least 1, got {0}")]
    InvalidRadius(usize),

    /// At least one generation is required.
    #[error("rows must be at least 1, got {0}")]
    InvalidRows(usize),

    /// The transition table for this base and neighborhood size is not
    /// addressable.
    #[error("rule table too large for base {base} with a {span}-cell window")]
    TableTooLarge {
        /// Alphabet size.
        base: u64,
        /// Neighborhood size, `2*radius + 1`.
        span: u32,
    },
}
