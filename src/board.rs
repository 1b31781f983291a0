use std::sync::Arc;

use fxhash::FxHashMap;
use rayon::prelude::*;

use crate::{Bounds, Config, ConfigError, Direction, MoveError, Pos, Vehicle};

/// A vehicle slid `magnitude` units in one direction. Boards log atomic
/// moves (magnitude 1); [`crate::aggregate`] merges runs of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub name: Arc<str>,
    pub magnitude: u32,
    pub direction: Direction,
}

impl Move {
    pub fn unit(name: Arc<str>, direction: Direction) -> Self {
        Self {
            name,
            magnitude: 1,
            direction,
        }
    }
}

/// Position-only identity of a board: `(name, x, y)` of every vehicle,
/// sorted by name. Orientation and length are fixed per name, and the move
/// log is ignored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(Box<[(Arc<str>, i32, i32)]>);

/// One search state: the vehicles, kept sorted by name, and the atomic moves
/// that led here from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    vehicles: Box<[Vehicle]>,
    moves: Vec<Move>,
}

impl Board {
    /// Build a root board. Only name uniqueness is checked here; grid bounds
    /// and overlaps are validated by [`crate::Game::new`].
    pub(crate) fn new(mut vehicles: Vec<Vehicle>) -> Result<Self, ConfigError> {
        vehicles.sort_by(|a, b| a.name().cmp(b.name()));
        if let Some(w) = vehicles.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(ConfigError::DuplicateName(w[0].name().clone()));
        }
        Ok(Self {
            vehicles: vehicles.into(),
            moves: Vec::new(),
        })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.index_of(name).map(|idx| &self.vehicles[idx])
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.vehicles
            .binary_search_by(|v| (**v.name()).cmp(name))
            .ok()
    }

    /// Atomic moves taken from the root.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// First pair of vehicles sharing a cell, in name order.
    pub fn find_overlap(&self) -> Option<(&Arc<str>, &Arc<str>, Pos)> {
        let mut occupied = FxHashMap::<Pos, &Arc<str>>::default();
        for vehicle in self.vehicles.iter() {
            for pos in vehicle.cells() {
                if let Some(first) = occupied.insert(pos, vehicle.name()) {
                    return Some((first, vehicle.name(), pos));
                }
            }
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.find_overlap().is_none()
    }

    /// True when the escape vehicle lies entirely within the rightmost
    /// `length` columns.
    pub fn is_goal(&self, config: &Config) -> bool {
        let Some(escape) = self.vehicle(&config.escape) else {
            return false;
        };
        let threshold = i64::from(config.bounds.x_max) - i64::from(escape.length());
        escape.cells().all(|pos| i64::from(pos.x) > threshold)
    }

    pub fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey(
            self.vehicles
                .iter()
                .map(|v| (v.name().clone(), v.pos().x, v.pos().y))
                .collect(),
        )
    }

    /// Copy of this board with vehicle `idx` replaced by `moved` and one
    /// move record appended.
    fn derive(&self, idx: usize, direction: Direction, moved: Vehicle) -> Self {
        debug_assert_ne!(
            self.vehicles[idx].pos(),
            moved.pos(),
            "successor of {} equals its parent",
            moved.name()
        );
        let mut vehicles = self.vehicles.clone();
        let name = moved.name().clone();
        vehicles[idx] = moved;
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(Move::unit(name, direction));
        Self { vehicles, moves }
    }

    fn vehicle_successors(&self, idx: usize, bounds: &Bounds) -> impl Iterator<Item = Self> + '_ {
        self.vehicles[idx]
            .candidate_moves(bounds)
            .into_iter()
            .map(move |(dir, moved)| self.derive(idx, dir, moved))
            .filter(Board::is_valid)
    }

    /// All valid boards one atomic move away, by vehicle name and then by
    /// direction.
    pub fn successors(&self, bounds: &Bounds) -> Vec<Self> {
        (0..self.vehicles.len())
            .flat_map(|idx| self.vehicle_successors(idx, bounds))
            .collect()
    }

    /// Same as [`Board::successors`], deriving each vehicle's moves on the
    /// rayon pool. The order of the result is unchanged.
    pub fn par_successors(&self, bounds: &Bounds) -> Vec<Self> {
        (0..self.vehicles.len())
            .into_par_iter()
            .flat_map_iter(|idx| self.vehicle_successors(idx, bounds))
            .collect()
    }

    /// Perform `mv` unit by unit, checking the grid and collisions at every
    /// step. The log receives one atomic record per unit.
    pub fn apply(&self, mv: &Move, bounds: &Bounds) -> Result<Self, MoveError> {
        let idx = self
            .index_of(&mv.name)
            .ok_or_else(|| MoveError::UnknownVehicle(mv.name.clone()))?;
        if !self.vehicles[idx].orientation().allows(mv.direction) {
            return Err(MoveError::WrongAxis {
                name: mv.name.clone(),
                direction: mv.direction,
            });
        }
        if mv.magnitude == 0 {
            return Err(MoveError::ZeroMagnitude(mv.name.clone()));
        }

        let mut board = self.clone();
        for _ in 0..mv.magnitude {
            let moved = board.vehicles[idx]
                .shifted(mv.direction)
                .filter(|moved| moved.fits(bounds))
                .ok_or_else(|| MoveError::OutOfBounds(mv.name.clone()))?;
            board = board.derive(idx, mv.direction, moved);
            if !board.is_valid() {
                return Err(MoveError::Collision(mv.name.clone()));
            }
        }
        Ok(board)
    }
}
