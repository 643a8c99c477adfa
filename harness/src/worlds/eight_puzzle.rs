//! `EightPuzzle`: the 3×3 sliding-tile puzzle.
//!
//! Tiles `1..=8` plus a blank (`0`). Actions move the blank. Goal layout:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 _
//! ```
//!
//! Half of all permutations cannot reach the goal; [`EightPuzzle::new`]
//! rejects those up front so fixtures never send a search into the full
//! 181,440-state unreachable component.

use std::fmt;

use waypoint_kernel::problem::{HeuristicFunction, Problem};

use crate::error::WorldError;

/// Goal tile layout, row-major.
pub const GOAL: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, 0]);

/// A tile layout, row-major, `0` is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board(pub [u8; 9]);

impl Board {
    fn blank(self) -> usize {
        self.0.iter().position(|&t| t == 0).unwrap_or(0)
    }

    /// Inversions among tiles, ignoring the blank.
    fn inversions(self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|b| a > b).count())
            .sum()
    }

    /// Whether the goal is reachable (even inversion count on a 3-wide board).
    #[must_use]
    pub fn is_solvable(self) -> bool {
        self.inversions() % 2 == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| if t == 0 { "_".to_string() } else { t.to_string() })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];
}

/// An 8-puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EightPuzzle {
    start: Board,
}

impl EightPuzzle {
    /// Instance starting from `tiles`.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidBoard`] unless `tiles` is a permutation of
    /// `0..=8`; [`WorldError::Unsolvable`] for the odd-parity half.
    pub fn new(tiles: [u8; 9]) -> Result<Self, WorldError> {
        let mut seen = [false; 9];
        for &t in &tiles {
            let slot = seen
                .get_mut(usize::from(t))
                .ok_or_else(|| WorldError::InvalidBoard {
                    detail: format!("tile {t} out of range"),
                })?;
            if *slot {
                return Err(WorldError::InvalidBoard {
                    detail: format!("tile {t} appears twice"),
                });
            }
            *slot = true;
        }
        let start = Board(tiles);
        if !start.is_solvable() {
            return Err(WorldError::Unsolvable {
                detail: start.to_string(),
            });
        }
        Ok(Self { start })
    }

    /// Two slides from the goal.
    #[must_use]
    pub fn two_moves() -> Self {
        Self {
            start: Board([1, 2, 3, 4, 5, 6, 0, 7, 8]),
        }
    }

    /// Eight slides from the goal.
    #[must_use]
    pub fn eight_moves() -> Self {
        Self {
            start: Board([1, 3, 6, 5, 0, 2, 4, 7, 8]),
        }
    }

    /// Fourteen slides from the goal.
    #[must_use]
    pub fn fourteen_moves() -> Self {
        Self {
            start: Board([8, 1, 3, 4, 0, 2, 7, 6, 5]),
        }
    }

    #[must_use]
    pub fn start(&self) -> Board {
        self.start
    }

    /// Replay `slides` from the start; `None` if a slide leaves the board.
    #[must_use]
    pub fn replay(&self, slides: &[Slide]) -> Option<Board> {
        slides.iter().try_fold(self.start, |board, slide| {
            self.actions(&board)
                .contains(slide)
                .then(|| self.result(&board, slide))
        })
    }
}

impl Problem for EightPuzzle {
    type State = Board;
    type Action = Slide;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "eight_puzzle"
    }

    fn initial_state(&self) -> Board {
        self.start
    }

    fn actions(&self, state: &Board) -> Vec<Slide> {
        let (row, col) = (state.blank() / 3, state.blank() % 3);
        Slide::ALL
            .into_iter()
            .filter(|slide| match slide {
                Slide::Up => row > 0,
                Slide::Down => row < 2,
                Slide::Left => col > 0,
                Slide::Right => col < 2,
            })
            .collect()
    }

    fn result(&self, state: &Board, action: &Slide) -> Board {
        let blank = state.blank();
        let target = match action {
            Slide::Up => blank - 3,
            Slide::Down => blank + 3,
            Slide::Left => blank - 1,
            Slide::Right => blank + 1,
        };
        let mut next = *state;
        next.0.swap(blank, target);
        next
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == GOAL
    }
}

/// Sum of each tile's grid distance to its goal cell. Admissible and
/// consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl HeuristicFunction<Board> for ManhattanDistance {
    #[allow(clippy::cast_precision_loss)]
    fn estimate(&self, state: &Board) -> f64 {
        let total: usize = state
            .0
            .iter()
            .enumerate()
            .filter(|(_, &t)| t != 0)
            .map(|(cell, &t)| {
                let home = usize::from(t - 1);
                (cell / 3).abs_diff(home / 3) + (cell % 3).abs_diff(home % 3)
            })
            .sum();
        total as f64
    }
}

/// Number of tiles out of place. Admissible and consistent, weaker than
/// [`ManhattanDistance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl HeuristicFunction<Board> for MisplacedTiles {
    #[allow(clippy::cast_precision_loss)]
    fn estimate(&self, state: &Board) -> f64 {
        let misplaced = state
            .0
            .iter()
            .zip(GOAL.0.iter())
            .filter(|(&t, &g)| t != 0 && t != g)
            .count();
        misplaced as f64
    }
}
