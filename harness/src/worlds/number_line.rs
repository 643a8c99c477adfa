//! `NumberLine`: integer walk with `+1`, `-1` and `×2` moves inside bounds.
//!
//! Small, unit-cost and cyclic: the fixture for shortest-path,
//! completeness and duplicate-suppression checks on uninformed search.

use waypoint_kernel::problem::Problem;

use crate::error::WorldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Increment,
    Decrement,
    Double,
}

/// Walk from `start` to `goal` without leaving `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLine {
    start: i64,
    goal: i64,
    low: i64,
    high: i64,
}

impl NumberLine {
    /// # Errors
    ///
    /// [`WorldError::OutOfBounds`] if `start` or `goal` lies outside
    /// `[low, high]`.
    pub fn new(start: i64, goal: i64, low: i64, high: i64) -> Result<Self, WorldError> {
        for value in [start, goal] {
            if !(low..=high).contains(&value) {
                return Err(WorldError::OutOfBounds { value, low, high });
            }
        }
        Ok(Self {
            start,
            goal,
            low,
            high,
        })
    }

    /// Number of states in the space.
    #[must_use]
    pub fn width(&self) -> u64 {
        self.high.abs_diff(self.low) + 1
    }

    fn in_bounds(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    fn apply(value: i64, step: Step) -> i64 {
        match step {
            Step::Increment => value.saturating_add(1),
            Step::Decrement => value.saturating_sub(1),
            Step::Double => value.saturating_mul(2),
        }
    }
}

impl Problem for NumberLine {
    type State = i64;
    type Action = Step;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "number_line"
    }

    fn initial_state(&self) -> i64 {
        self.start
    }

    fn actions(&self, state: &i64) -> Vec<Step> {
        [Step::Increment, Step::Decrement, Step::Double]
            .into_iter()
            .filter(|&step| {
                let next = Self::apply(*state, step);
                next != *state && self.in_bounds(next)
            })
            .collect()
    }

    fn result(&self, state: &i64, action: &Step) -> i64 {
        Self::apply(*state, *action)
    }

    fn is_goal(&self, state: &i64) -> bool {
        *state == self.goal
    }
}
