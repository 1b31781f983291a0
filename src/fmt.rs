use std::fmt::{self, Write};

use fxhash::FxHashMap;

use crate::{Bounds, Direction, Game, Move, Orientation, Pos};

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => "up".fmt(f),
            Direction::Down => "down".fmt(f),
            Direction::Left => "left".fmt(f),
            Direction::Right => "right".fmt(f),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Up => "up".fmt(f),
            Orientation::Down => "down".fmt(f),
            Orientation::Left => "left".fmt(f),
            Orientation::Right => "right".fmt(f),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{} x {}..{}",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.magnitude, self.direction)
    }
}

/// The grid, top row first. Each vehicle is drawn with the first character
/// of its name.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = &self.config.bounds;
        let mut occupied = FxHashMap::<Pos, char>::default();
        for vehicle in self.board.vehicles() {
            let ch = vehicle.name().chars().next().unwrap_or('?');
            for pos in vehicle.cells().filter(|&pos| bounds.contains(pos)) {
                occupied.insert(pos, ch);
            }
        }
        for y in bounds.y_min..=bounds.y_max {
            for x in bounds.x_min..=bounds.x_max {
                f.write_char(occupied.get(&Pos::new(x, y)).copied().unwrap_or('.'))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// One numbered line per move: `INDEX NAME MAGNITUDE DIRECTION`.
pub fn render(moves: &[Move]) -> String {
    moves
        .iter()
        .zip(1..)
        .map(|(mv, i)| format!("{i} {mv}\n"))
        .collect()
}
