use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::{Bounds, ConfigError, Direction, Orientation, Pos};

/// A rigid vehicle. Moving one produces a new value.
///
/// Every cell of the body has representable coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    name: Arc<str>,
    length: u32,
    pos: Pos,
    orientation: Orientation,
}

impl Vehicle {
    pub fn new(
        name: impl Into<Arc<str>>,
        length: u32,
        pos: Pos,
        orientation: Orientation,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if length == 0 {
            return Err(ConfigError::ZeroLength(name));
        }
        let tail = i32::try_from(length)
            .ok()
            .and_then(|len| pos.checked_offset(orientation.step(), len - 1));
        if tail.is_none() {
            return Err(ConfigError::TooLong { name, length, pos });
        }
        Ok(Self {
            name,
            length,
            pos,
            orientation,
        })
    }

    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, starting at the reference cell.
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let (pos, step) = (self.pos, self.orientation.step());
        (0..self.len()).map(move |i| pos.offset(step, i))
    }

    /// The cell at the far end of the body.
    pub fn tail(&self) -> Pos {
        self.pos.offset(self.orientation.step(), self.len() - 1)
    }

    // Checked against `i32::MAX` in `new`.
    fn len(&self) -> i32 {
        self.length as i32
    }

    pub fn fits(&self, bounds: &Bounds) -> bool {
        bounds.contains(self.pos) && bounds.contains(self.tail())
    }

    /// The vehicle one unit further in `dir`, or `None` past the coordinate
    /// range.
    pub fn shifted(&self, dir: Direction) -> Option<Self> {
        debug_assert!(self.orientation.allows(dir), "{} cannot move {dir}", self.name);
        self.tail().checked_offset(dir.delta(), 1)?;
        Some(Self {
            pos: self.pos.checked_offset(dir.delta(), 1)?,
            ..self.clone()
        })
    }

    /// One-unit relocations along the vehicle's axis that stay on the grid.
    /// Other vehicles are not considered.
    pub fn candidate_moves(&self, bounds: &Bounds) -> ArrayVec<(Direction, Vehicle), 2> {
        self.orientation
            .axis()
            .into_iter()
            .filter_map(|dir| Some((dir, self.shifted(dir)?)))
            .filter(|(_, moved)| moved.fits(bounds))
            .collect()
    }
}
