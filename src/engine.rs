//! The automaton grid engine.
//!
//! [`GeneralizedCA`] holds one generation call's configuration and fills a
//! working grid row by row. The working grid is allocated much larger than
//! the requested output (`2*rows` by `4*rows + radius`) with the seed at its
//! horizontal center, and the returned grid is the `rows x 2*rows` window
//! cropped from the middle. Boundary effects creep inward one column per row,
//! so they can never reach the cropped window; the automaton behaves as if it
//! ran on an unbounded line, at the cost of extra memory and compute.

use crate::error::AutomatonError;
use crate::frames::reveal_frames;
use crate::grid::Grid;
use crate::rule::{RuleMode, RuleTable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How row 0 of the working grid is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitialCondition {
    /// A single cell with value 1 at the horizontal center.
    #[default]
    CenterSeed,
    /// Every column drawn uniformly from `[0, base)` with a seeded RNG, so
    /// random starts are still reproducible.
    Random {
        /// RNG seed.
        seed: u64,
    },
}

/// A generalized 1D cellular automaton generator.
///
/// Defaults match the classic elementary automata: base 2, radius 1,
/// positional (non-totalistic) indexing, single centered seed.
///
/// # Example
///
/// ```
/// use cellweave::GeneralizedCA;
///
/// let mut ca = GeneralizedCA::new(90, 16);
/// let grid = ca.generate().expect("valid configuration");
/// // Rule 90 grows one cell per row in each direction
/// assert_eq!(grid.row(1).iter().filter(|&&v| v != 0.0).count(), 2);
///
/// ca.set_radius(2);
/// let wider = ca.generate().expect("valid configuration");
/// assert_eq!(wider.rows(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneralizedCA {
    /// Rule number.
    rule: u64,
    /// Number of generations in the output.
    rows: usize,
    /// Alphabet size.
    base: u64,
    /// Neighborhood radius; the window covers `2*radius + 1` cells.
    radius: usize,
    /// Index by neighbor sum instead of positional digits.
    totalistic: bool,
    /// Row-0 seeding strategy.
    init: InitialCondition,
}

impl GeneralizedCA {
    /// Creates a generator with default base 2 and radius 1.
    pub fn new(rule: u64, rows: usize) -> Self {
        Self {
            rule,
            rows,
            base: 2,
            radius: 1,
            totalistic: false,
            init: InitialCondition::CenterSeed,
        }
    }

    /// Rule number.
    pub fn rule(&self) -> u64 {
        self.rule
    }

    /// Number of generations in the output.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Alphabet size.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Neighborhood radius.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Sets the rule number.
    pub fn set_rule(&mut self, rule: u64) {
        self.rule = rule;
    }

    /// Sets the alphabet size.
    pub fn set_base(&mut self, base: u64) {
        self.base = base;
    }

    /// Sets the neighborhood radius.
    pub fn set_radius(&mut self, radius: usize) {
        self.radius = radius;
    }

    /// Switches between positional and neighbor-sum indexing.
    pub fn set_totalistic(&mut self, totalistic: bool) {
        self.totalistic = totalistic;
    }

    /// Sets the row-0 seeding strategy.
    pub fn set_initial(&mut self, init: InitialCondition) {
        self.init = init;
    }

    /// Generates the evolution grid by transition-table lookup.
    ///
    /// Returns a `rows x (2*rows)` grid; row 0 is the initial condition.
    pub fn generate(&self) -> Result<Grid, AutomatonError> {
        let mode = if self.totalistic {
            RuleMode::Totalistic
        } else {
            RuleMode::Standard
        };
        let table = RuleTable::build(self.rule, self.base, self.radius, mode)?;
        self.run(|window| table.apply(window))
    }

    /// Generates the evolution grid with a caller-supplied update function.
    ///
    /// `f` receives the `2*radius + 1` parent cells in natural left-to-right
    /// order and returns the new cell value; states need not be integers.
    /// The rule number and totalistic flag are ignored on this path.
    pub fn generate_with<F>(&self, f: F) -> Result<Grid, AutomatonError>
    where
        F: Fn(&[f64]) -> f64,
    {
        if self.base < 2 {
            return Err(AutomatonError::InvalidBase(self.base));
        }
        if self.radius < 1 {
            return Err(AutomatonError::InvalidRadius(self.radius));
        }
        self.run(f)
    }

    /// Generates the grid and expands it into reveal frames.
    pub fn generate_frames(&self) -> Result<Vec<Grid>, AutomatonError> {
        Ok(reveal_frames(&self.generate()?))
    }

    /// Like [`generate_frames`](Self::generate_frames) for continuous rules.
    pub fn generate_frames_with<F>(&self, f: F) -> Result<Vec<Grid>, AutomatonError>
    where
        F: Fn(&[f64]) -> f64,
    {
        Ok(reveal_frames(&self.generate_with(f)?))
    }

    /// Allocates, seeds, fills, and crops the working grid.
    fn run<F>(&self, update: F) -> Result<Grid, AutomatonError>
    where
        F: Fn(&[f64]) -> f64,
    {
        if self.rows < 1 {
            return Err(AutomatonError::InvalidRows(self.rows));
        }

        let rows = self.rows;
        let height = 2 * rows;
        let width = 4 * rows + self.radius;
        let mut grid = Grid::zeros(height, width);

        match self.init {
            InitialCondition::CenterSeed => grid.set(0, 2 * rows, 1.0),
            InitialCondition::Random { seed } => {
                let mut rng = SimpleRng::new(seed);
                for col in 0..width {
                    grid.set(0, col, rng.next_below(self.base) as f64);
                }
            }
        }

        let span = 2 * self.radius + 1;
        let mut window = vec![0.0; span];
        for i in 1..height {
            // Columns past 4*rows stay zero; the crop never sees them anyway.
            for j in self.radius..4 * rows {
                for (k, slot) in window.iter_mut().enumerate() {
                    *slot = grid.get(i - 1, j - self.radius + k);
                }
                grid.set(i, j, update(&window));
            }
        }

        Ok(grid.crop(0..rows, rows..3 * rows))
    }
}

/// Simple seeded RNG for random initial rows.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}
