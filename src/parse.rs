use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::{Config, ConfigError, Direction, Game, Orientation, Pos, Vehicle};

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match &*s.to_ascii_lowercase() {
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => return Err(ConfigError::UnknownOrientation(s.to_owned())),
        })
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match &*s.to_ascii_lowercase() {
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => return Err(ConfigError::UnknownDirection(s.to_owned())),
        })
    }
}

impl FromStr for Pos {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').context("Expecting X,Y")?;
        let x = x.trim().parse().with_context(|| format!("Invalid x {x:?}"))?;
        let y = y.trim().parse().with_context(|| format!("Invalid y {y:?}"))?;
        Ok(Pos { x, y })
    }
}

/// `NAME LENGTH X,Y ORIENTATION`
impl FromStr for Vehicle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split_whitespace().collect::<Vec<_>>();
        ensure!(fields.len() == 4, "Expecting 4 fields, got {}", fields.len());
        let length = fields[1]
            .parse::<u32>()
            .with_context(|| format!("Invalid length {:?}", fields[1]))?;
        let pos = fields[2].parse::<Pos>()?;
        let orientation = fields[3].parse::<Orientation>()?;
        Ok(Vehicle::new(fields[0], length, pos, orientation)?)
    }
}

impl Game {
    /// Parse one vehicle per line. Blank lines and `#` comments are skipped.
    pub fn parse_with(s: &str, config: Config) -> Result<Self> {
        let mut vehicles = Vec::new();
        for (line, lineno) in s.lines().zip(1..) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let vehicle = line
                .parse::<Vehicle>()
                .with_context(|| format!("Invalid vehicle on line {lineno}"))?;
            vehicles.push(vehicle);
        }
        Ok(Game::new(config, vehicles)?)
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::parse_with(s, Config::default())
    }
}
