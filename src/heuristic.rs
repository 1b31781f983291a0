use std::sync::Arc;

use crate::{Board, Bounds, Config};

/// Estimates the remaining effort from a board to a goal board.
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;
}

/// Always zero, which turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl Heuristic for NullHeuristic {
    fn estimate(&self, _board: &Board) -> u32 {
        0
    }
}

/// Scores the escape vehicle's distance to the right edge and the vehicles
/// still standing in its lane.
///
/// Both terms are scaled well above the unit step cost, so the estimate can
/// overshoot and the search is not guaranteed to find a shortest solution.
#[derive(Debug, Clone)]
pub struct ExitLane {
    bounds: Bounds,
    escape: Arc<str>,
    /// Added for every blocking cell ahead of the escape vehicle.
    pub blocker_penalty: u32,
    /// Multiplied with the number of columns left to travel.
    pub distance_weight: u32,
}

impl ExitLane {
    pub fn new(config: &Config) -> Self {
        Self {
            bounds: config.bounds,
            escape: config.escape.clone(),
            blocker_penalty: 10,
            distance_weight: 10,
        }
    }
}

impl Heuristic for ExitLane {
    fn estimate(&self, board: &Board) -> u32 {
        let Some(escape) = board.vehicle(&self.escape) else {
            return 0;
        };

        // Columns are widened to i64 so grids at the edge of the i32 range
        // cannot overflow.
        let mut score = 0u32;
        let mut rightmost_x = i64::from(self.bounds.x_min) - 1;
        for pos in escape.cells() {
            if self.bounds.contains(pos) {
                score += 1;
            }
            rightmost_x = rightmost_x.max(pos.x.into());
        }

        let lane = escape.pos().y;
        let blockers = board
            .vehicles()
            .iter()
            .filter(|v| v.name() != escape.name())
            .flat_map(|v| v.cells())
            .filter(|pos| pos.y == lane && i64::from(pos.x) > rightmost_x)
            .count();
        let blockers = u32::try_from(blockers).unwrap_or(u32::MAX);
        score = score.saturating_add(blockers.saturating_mul(self.blocker_penalty));

        let leftmost_x = rightmost_x - i64::from(escape.length()) + 1;
        let distance = (i64::from(self.bounds.x_max) - leftmost_x).max(0);
        let distance = u32::try_from(distance).unwrap_or(u32::MAX);
        score.saturating_add(distance.saturating_mul(self.distance_weight))
    }
}
