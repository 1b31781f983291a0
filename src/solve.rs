use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crate::heuristic::Heuristic;
use crate::{Board, CanonicalKey, Game, Move};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;
type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Atomic moves from the root to a goal board.
    Found(Vec<Move>),
    /// The whole reachable space was searched without reaching a goal.
    NotFound,
    /// A search limit was hit first.
    Aborted { expanded: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    pub max_expansions: Option<usize>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub limits: Limits,
    /// Derive successors on the rayon pool.
    pub parallel: bool,
}

struct Entry {
    f: u32,
    key: CanonicalKey,
    board: Board,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so that `BinaryHeap` pops the lowest `f`, then the lowest key.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.key.cmp(&self.key))
    }
}

/// Best-first search ordered by `g + h`, one unit of cost per atomic move.
///
/// Stale frontier entries are skipped when popped. `on_step` is called once
/// per expanded board.
pub fn astar(
    game: &Game,
    heuristic: &impl Heuristic,
    opts: &SearchOptions,
    mut on_step: impl FnMut(),
) -> Outcome {
    let started = Instant::now();
    let bounds = &game.config.bounds;

    let mut g = IndexMap::<CanonicalKey, u32>::default();
    let mut visited = IndexSet::<CanonicalKey>::default();
    let mut frontier = BinaryHeap::new();

    let root_key = game.board.canonical_key();
    g.insert(root_key.clone(), 0);
    frontier.push(Entry {
        f: heuristic.estimate(&game.board),
        key: root_key,
        board: game.board.clone(),
    });
    log::debug!(
        "searching {} vehicles on {}",
        game.board.vehicles().len(),
        bounds
    );

    while let Some(Entry { f, key, board }) = frontier.pop() {
        if visited.contains(&key) {
            continue;
        }
        if board.is_goal(&game.config) {
            log::debug!(
                "goal reached after {} expansions, {} moves",
                visited.len(),
                board.moves().len()
            );
            return Outcome::Found(board.moves().to_vec());
        }

        let expanded = visited.len();
        let over_budget = opts.limits.max_expansions.map_or(false, |max| expanded >= max)
            || opts.limits.timeout.map_or(false, |t| started.elapsed() >= t);
        if over_budget {
            log::debug!("search aborted after {expanded} expansions");
            return Outcome::Aborted { expanded };
        }

        #[cfg(feature = "coz")]
        coz::progress!("Expand");

        on_step();
        let g_cur = g[&key];
        log::trace!("expanding f={f} g={g_cur} frontier={}", frontier.len());
        visited.insert(key);

        let successors = if opts.parallel {
            board.par_successors(bounds)
        } else {
            board.successors(bounds)
        };
        for succ in successors {
            let succ_key = succ.canonical_key();
            if visited.contains(&succ_key) {
                continue;
            }
            let tentative = g_cur + 1;
            if g.get(&succ_key).map_or(true, |&known| tentative < known) {
                g.insert(succ_key.clone(), tentative);
                frontier.push(Entry {
                    f: tentative.saturating_add(heuristic.estimate(&succ)),
                    key: succ_key,
                    board: succ,
                });
            }
        }
    }

    log::debug!("no solution, {} boards expanded", visited.len());
    Outcome::NotFound
}
