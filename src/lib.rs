//! Generalized one-dimensional cellular automata for procedural pattern
//! generation.
//!
//! Produces 2D grids where each row is one generation of a 1D automaton:
//! arbitrary alphabet size (base), arbitrary neighborhood radius, optional
//! totalistic reduction, and optional continuous-valued update functions.
//! Also ships a per-row reveal expander for animation pipelines and a
//! Conway-style single-step update over binary grids.
//!
//! # Example
//!
//! ```
//! use cellweave::{GeneralizedCA, InitialCondition, presets};
//!
//! // Rule 30 from a single centered seed
//! let ca = GeneralizedCA::new(presets::RULE_30, 32);
//! let grid = ca.generate().expect("valid configuration");
//! assert_eq!((grid.rows(), grid.cols()), (32, 64));
//!
//! // Totalistic base-3 automaton from a seeded random first row
//! let mut ca = GeneralizedCA::new(presets::TOTALISTIC_3_1599, 32);
//! ca.set_base(3);
//! ca.set_totalistic(true);
//! ca.set_initial(InitialCondition::Random { seed: 12345 });
//! let grid = ca.generate().expect("valid configuration");
//!
//! // Continuous states: the rule is any function of the neighborhood
//! let ca = GeneralizedCA::new(0, 16);
//! let smooth = ca
//!     .generate_with(|w| w.iter().sum::<f64>() / w.len() as f64)
//!     .expect("valid configuration");
//! assert_eq!(smooth.rows(), 16);
//! ```

mod digits;
mod engine;
mod error;
mod frames;
mod grid;
mod life;
mod rule;

pub use digits::base_rep;
pub use engine::{GeneralizedCA, InitialCondition};
pub use error::AutomatonError;
pub use frames::reveal_frames;
pub use grid::Grid;
pub use life::{life_run, life_step};
pub use rule::{RuleMode, RuleTable};

/// Named rule numbers worth trying.
pub mod presets {
    /// Rule 30 - chaotic; the classic pseudo-random generator.
    pub const RULE_30: u64 = 30;

    /// Rule 90 - Sierpinski triangle from a single seed.
    pub const RULE_90: u64 = 90;

    /// Rule 110 - complex localized structures, Turing complete.
    pub const RULE_110: u64 = 110;

    /// Rule 184 - traffic flow model.
    pub const RULE_184: u64 = 184;

    /// Totalistic base-3 rule with organic, coral-like growth.
    /// Use with `base = 3`, `totalistic = true`.
    pub const TOTALISTIC_3_1599: u64 = 1599;

    /// Totalistic base-3 rule producing sparse branching structures.
    /// Use with `base = 3`, `totalistic = true`.
    pub const TOTALISTIC_3_357: u64 = 357;
}
