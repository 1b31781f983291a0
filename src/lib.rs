//! A solver for sliding-vehicle escape puzzles ("Rush Hour").
//!
//! Vehicles sit on a rectangular grid and may only slide along the axis of
//! their orientation. The goal is to bring the escape vehicle into the
//! rightmost columns of the grid. [`solve::astar`] searches for a sequence of
//! unit moves, and [`aggregate()`] compresses it into run-length moves.

use std::sync::Arc;

use thiserror::Error;

mod aggregate;
mod board;
mod fmt;
pub mod heuristic;
mod parse;
pub mod solve;
mod vehicle;

pub use aggregate::{aggregate, expand};
pub use board::{Board, CanonicalKey, Move};
pub use fmt::render;
pub use vehicle::Vehicle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown orientation {0:?}")]
    UnknownOrientation(String),
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
    #[error("vehicle {0} has zero length")]
    ZeroLength(Arc<str>),
    #[error("vehicle name is empty")]
    EmptyName,
    #[error("vehicle {name} of length {length} does not fit at {pos}")]
    TooLong {
        name: Arc<str>,
        length: u32,
        pos: Pos,
    },
    #[error("duplicate vehicle name {0}")]
    DuplicateName(Arc<str>),
    #[error("vehicle {name} leaves the grid at {pos}")]
    OutOfBounds { name: Arc<str>, pos: Pos },
    #[error("vehicles {first} and {second} overlap at {pos}")]
    Overlap {
        first: Arc<str>,
        second: Arc<str>,
        pos: Pos,
    },
    #[error("escape vehicle {0:?} not found")]
    MissingEscape(Arc<str>),
    #[error("invalid grid bounds {0}")]
    InvalidBounds(Bounds),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no vehicle named {0}")]
    UnknownVehicle(Arc<str>),
    #[error("vehicle {name} cannot move {direction}")]
    WrongAxis { name: Arc<str>, direction: Direction },
    #[error("vehicle {0} would leave the grid")]
    OutOfBounds(Arc<str>),
    #[error("vehicle {0} would collide")]
    Collision(Arc<str>),
    #[error("move of vehicle {0} has zero magnitude")]
    ZeroMagnitude(Arc<str>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Which way a vehicle's body extends from its reference cell. This also
/// fixes the single axis the vehicle can slide along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Offset from one body cell to the next.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Up => Direction::Up.delta(),
            Orientation::Down => Direction::Down.delta(),
            Orientation::Left => Direction::Left.delta(),
            Orientation::Right => Direction::Right.delta(),
        }
    }

    /// Directions of travel, in generation order.
    pub fn axis(self) -> [Direction; 2] {
        match self {
            Orientation::Up | Orientation::Down => [Direction::Up, Direction::Down],
            Orientation::Left | Orientation::Right => [Direction::Left, Direction::Right],
        }
    }

    pub fn allows(self, dir: Direction) -> bool {
        self.axis().contains(&dir)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32), times: i32) -> Self {
        Self {
            x: self.x + dx * times,
            y: self.y + dy * times,
        }
    }

    /// Like [`Pos::offset`], but `None` when a coordinate overflows.
    pub fn checked_offset(self, (dx, dy): (i32, i32), times: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx.checked_mul(times)?)?,
            y: self.y.checked_add(dy.checked_mul(times)?)?,
        })
    }
}

/// Inclusive rectangle of playable cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: 1,
            x_max: 6,
            y_min: 1,
            y_max: 6,
        }
    }
}

impl Bounds {
    pub fn contains(&self, pos: Pos) -> bool {
        (self.x_min..=self.x_max).contains(&pos.x) && (self.y_min..=self.y_max).contains(&pos.y)
    }

    /// Number of columns, `None` if empty or wider than `i32` can index.
    pub fn width(&self) -> Option<u32> {
        span(self.x_min, self.x_max)
    }

    pub fn height(&self) -> Option<u32> {
        span(self.y_min, self.y_max)
    }

    fn is_valid(&self) -> bool {
        self.width().is_some() && self.height().is_some()
    }
}

fn span(min: i32, max: i32) -> Option<u32> {
    let diff = u32::try_from(max.checked_sub(min)?).ok()?;
    Some(diff + 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bounds: Bounds,
    /// Name of the vehicle that has to reach the right edge.
    pub escape: Arc<str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            escape: "S".into(),
        }
    }
}

/// A validated puzzle: the grid configuration and the root board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub config: Config,
    pub board: Board,
}

impl Game {
    pub fn new(config: Config, vehicles: Vec<Vehicle>) -> Result<Self, ConfigError> {
        if !config.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds(config.bounds));
        }
        let board = Board::new(vehicles)?;
        for vehicle in board.vehicles() {
            if !vehicle.fits(&config.bounds) {
                let outside = |pos: &Pos| !config.bounds.contains(*pos);
                return Err(ConfigError::OutOfBounds {
                    name: vehicle.name().clone(),
                    pos: vehicle.cells().find(outside).unwrap_or_else(|| vehicle.tail()),
                });
            }
        }
        if let Some((first, second, pos)) = board.find_overlap() {
            return Err(ConfigError::Overlap {
                first: first.clone(),
                second: second.clone(),
                pos,
            });
        }
        if board.vehicle(&config.escape).is_none() {
            return Err(ConfigError::MissingEscape(config.escape));
        }
        Ok(Self { config, board })
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_goal(&self.config)
    }

    /// Apply `moves` one after another, starting from the current board.
    pub fn replay<'a>(
        &self,
        moves: impl IntoIterator<Item = &'a Move>,
    ) -> Result<Board, MoveError> {
        let mut board = self.board.clone();
        for mv in moves {
            board = board.apply(mv, &self.config.bounds)?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Bounds {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[test]
    fn bounds_span() {
        assert_eq!(Bounds::default().width(), Some(6));
        assert_eq!(bounds(-1, -1, 0, 3).width(), Some(1));
        assert_eq!(bounds(2, 1, 0, 3).width(), None);
        assert_eq!(bounds(i32::MIN, -1, 0, 0).width(), Some(1 << 31));
        assert_eq!(bounds(0, 0, i32::MIN, 0).height(), None);
        assert_eq!(bounds(i32::MIN, i32::MAX, 0, 0).width(), None);
    }

    #[test]
    fn unrepresentable_bounds_rejected() {
        let vehicle = Vehicle::new("S", 2, Pos::new(1, 3), Orientation::Right).unwrap();
        for bounds in [
            bounds(1, 6, 6, 1),
            bounds(i32::MIN, i32::MAX, 1, 6),
            bounds(1, 6, -2, i32::MAX),
        ] {
            let config = Config {
                bounds,
                ..Default::default()
            };
            assert_eq!(
                Game::new(config, vec![vehicle.clone()]),
                Err(ConfigError::InvalidBounds(bounds))
            );
        }
    }

    #[test]
    fn long_vehicle_reports_first_cell_off_grid() {
        let length = i32::MAX as u32;
        let vehicle = Vehicle::new("B", length, Pos::new(4, 1), Orientation::Down).unwrap();
        assert_eq!(
            Game::new(Config::default(), vec![vehicle]),
            Err(ConfigError::OutOfBounds {
                name: "B".into(),
                pos: Pos::new(4, 7)
            })
        );
    }
}
