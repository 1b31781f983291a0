use anyhow::{ensure, Context};
use rush_solver::heuristic::ExitLane;
use rush_solver::solve::{self, Outcome, SearchOptions};
use rush_solver::{aggregate, expand, render, Game};

use crate::common::*;

mod common;

fn main() {
    run_tests("solve", |content| {
        let input = input_of(content);
        let game = input.parse::<Game>().context("Invalid puzzle")?;

        let heuristic = ExitLane::new(&game.config);
        let outcome = solve::astar(&game, &heuristic, &SearchOptions::default(), || {});
        let got = match outcome {
            Outcome::Found(moves) => {
                // Validate.
                let end = game.replay(&moves).context("Invalid move")?;
                ensure!(end.is_goal(&game.config), "Invalid solution");
                let aggregated = aggregate(&moves);
                ensure!(expand(&aggregated) == moves, "Aggregation lost moves");
                let end = game.replay(&aggregated).context("Invalid aggregated move")?;
                ensure!(end.is_goal(&game.config), "Invalid aggregated solution");

                format!("solved in {} moves\n{}", moves.len(), render(&aggregated))
            }
            Outcome::NotFound => "no solution\n".to_owned(),
            Outcome::Aborted { expanded } => format!("aborted after {expanded}\n"),
        };

        Ok(format!("{input}\n\n{SEPARATOR}{got}"))
    });
}
