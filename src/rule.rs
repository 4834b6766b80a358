//! Rule-number decoding into transition tables.
//!
//! A rule number is an integer whose base-`b` digits spell out a lookup
//! table: entry `k` is the new cell state for a neighborhood that indexes to
//! `k`. How a neighborhood turns into an index depends on the [`RuleMode`].

use crate::digits::base_rep;
use crate::error::AutomatonError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a neighborhood window maps to a table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RuleMode {
    /// Positional indexing: the window is read as a base-`b` number, so the
    /// table has `base^(2*radius+1)` entries.
    #[default]
    Standard,
    /// The index is the raw sum of the window's cell values, so the table has
    /// `(2*radius+1)*(base-1) + 1` entries.
    Totalistic,
    /// A caller-supplied function replaces the table entirely. Shares the
    /// totalistic table length; the entries are never consulted for output.
    Continuous,
}

impl RuleMode {
    /// Returns the base used for positional weighting when indexing.
    ///
    /// Totalistic and continuous modes weight every position by 1, which is
    /// what reduces positional indexing to a plain sum.
    pub fn index_base(&self, base: u64) -> u64 {
        match self {
            RuleMode::Standard => base,
            RuleMode::Totalistic | RuleMode::Continuous => 1,
        }
    }
}

/// A decoded transition table for one automaton configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleTable {
    /// New-state digits, indexed by neighborhood index.
    entries: Vec<u64>,
    /// Positional weight base for indexing (1 in totalistic mode).
    index_base: u64,
}

impl RuleTable {
    /// Decodes `rule` into a transition table for the given configuration.
    ///
    /// The rule number is always decoded in the original `base`, whatever the
    /// mode; only the indexing scheme changes. By construction the table is
    /// strictly longer than the largest index any valid neighborhood can
    /// produce:
    ///
    /// - standard: max index `base^(2r+1) - 1`, length `base^(2r+1)`
    /// - totalistic: max index `(2r+1)*(base-1)`, length `(2r+1)*(base-1) + 1`
    pub fn build(
        rule: u64,
        base: u64,
        radius: usize,
        mode: RuleMode,
    ) -> Result<Self, AutomatonError> {
        let len = Self::table_len(base, radius, mode)?;
        Ok(Self {
            entries: base_rep(rule, base, len),
            index_base: mode.index_base(base),
        })
    }

    /// Returns the table length for a configuration without decoding a rule.
    pub fn table_len(base: u64, radius: usize, mode: RuleMode) -> Result<usize, AutomatonError> {
        if base < 2 {
            return Err(AutomatonError::InvalidBase(base));
        }
        if radius < 1 {
            return Err(AutomatonError::InvalidRadius(radius));
        }

        let span = (2 * radius + 1) as u32;
        match mode {
            RuleMode::Standard => base
                .checked_pow(span)
                .and_then(|n| usize::try_from(n).ok())
                .ok_or(AutomatonError::TableTooLarge { base, span }),
            RuleMode::Totalistic | RuleMode::Continuous => (span as u64)
                .checked_mul(base - 1)
                .and_then(|n| n.checked_add(1))
                .and_then(|n| usize::try_from(n).ok())
                .ok_or(AutomatonError::TableTooLarge { base, span }),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The positional weight base used for indexing.
    pub fn index_base(&self) -> u64 {
        self.index_base
    }

    /// Looks up the new state for a neighborhood window.
    ///
    /// `window` is in natural left-to-right order; weights grow from the
    /// right end (`index_base^0` for the rightmost cell), matching the
    /// conventional rule-number bit ordering. Cell values are truncated to
    /// integers before weighting.
    pub fn apply(&self, window: &[f64]) -> f64 {
        let mut index: u64 = 0;
        let mut weight: u64 = 1;
        for &cell in window.iter().rev() {
            index += weight * cell as u64;
            weight *= self.index_base;
        }
        self.entries[index as usize] as f64
    }
}
