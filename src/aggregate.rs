use crate::Move;

/// Merge each maximal run of moves sharing vehicle and direction into one
/// move carrying the summed magnitude.
pub fn aggregate(moves: &[Move]) -> Vec<Move> {
    let mut out = Vec::<Move>::new();
    for mv in moves {
        match out.last_mut() {
            Some(last) if last.name == mv.name && last.direction == mv.direction => {
                last.magnitude += mv.magnitude;
            }
            _ => out.push(mv.clone()),
        }
    }
    out
}

/// Inverse of [`aggregate`]: split every move into unit moves.
pub fn expand(moves: &[Move]) -> Vec<Move> {
    moves
        .iter()
        .flat_map(|mv| {
            std::iter::repeat_with(|| Move::unit(mv.name.clone(), mv.direction))
                .take(mv.magnitude as usize)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction::{self, *};

    fn unit(name: &str, direction: Direction) -> Move {
        Move::unit(name.into(), direction)
    }

    fn mv(name: &str, magnitude: u32, direction: Direction) -> Move {
        Move {
            name: name.into(),
            magnitude,
            direction,
        }
    }

    fn sample() -> Vec<Move> {
        vec![
            unit("B", Down),
            unit("A", Left),
            unit("A", Left),
            unit("A", Right),
            unit("S", Right),
            unit("S", Right),
            unit("S", Right),
            unit("B", Down),
        ]
    }

    #[test]
    fn merges_runs_only() {
        assert_eq!(
            aggregate(&sample()),
            [
                mv("B", 1, Down),
                mv("A", 2, Left),
                mv("A", 1, Right),
                mv("S", 3, Right),
                mv("B", 1, Down),
            ]
        );
    }

    #[test]
    fn empty() {
        assert!(aggregate(&[]).is_empty());
        assert!(expand(&[]).is_empty());
    }

    #[test]
    fn expand_restores_atomic_moves() {
        let moves = sample();
        assert_eq!(expand(&aggregate(&moves)), moves);
    }

    #[test]
    fn aggregation_is_stable() {
        let once = aggregate(&sample());
        assert_eq!(aggregate(&expand(&once)), once);
        assert_eq!(aggregate(&once), once);
    }
}
