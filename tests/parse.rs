use rush_solver::Game;

use crate::common::*;

mod common;

fn main() {
    run_tests("parse", |content| {
        let input = input_of(content);
        let got = match input.parse::<Game>() {
            Ok(game) => game.to_string(),
            Err(err) => format!("error: {err:#}\n"),
        };
        Ok(format!("{input}\n\n{SEPARATOR}{got}"))
    });
}
