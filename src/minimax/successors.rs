//! Successor enumeration and deduplication.
//!
//! The branching set of a node is built by asking the state for its
//! successors at every grid locus in ascending order. A candidate is dropped
//! when:
//! - its cells are identical to the parent's (a no-op action), or
//! - it equals a candidate that was already kept.
//!
//! The first occurrence of a state always wins, so the order of the kept
//! children is deterministic: loci ascending, then the order the game
//! returned them in.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};
use smallvec::SmallVec;

use crate::core::Grid;
use crate::rules::GameState;

use super::stats::SearchStats;

/// Distinct, non-trivial children of `parent`.
///
/// Returns an empty vec when `parent` has no legal move.
pub fn distinct_successors<S: GameState>(parent: &S) -> Vec<S> {
    collect_successors(parent, &mut SearchStats::default())
}

/// Same as [`distinct_successors`], counting candidates into `stats`.
///
/// Candidates are bucketed by grid hash and confirmed with
/// `GameState::equals`, so games overriding `equals` must keep it
/// consistent with grid equality.
pub(crate) fn collect_successors<S: GameState>(parent: &S, stats: &mut SearchStats) -> Vec<S> {
    let parent_grid = parent.grid();
    let mut kept: Vec<S> = Vec::new();
    let mut buckets: FxHashMap<u64, SmallVec<[usize; 2]>> = FxHashMap::default();

    for locus in 0..parent_grid.len() {
        for candidate in parent.successors(locus) {
            stats.successors_generated += 1;

            if candidate.grid().same_cells(parent_grid) {
                stats.noop_discarded += 1;
                continue;
            }

            let bucket = buckets.entry(grid_hash(candidate.grid())).or_default();
            if bucket.iter().any(|&i| kept[i].equals(&candidate)) {
                stats.duplicates_discarded += 1;
                continue;
            }

            bucket.push(kept.len());
            kept.push(candidate);
        }
    }

    kept
}

fn grid_hash(grid: &Grid) -> u64 {
    let mut hasher = FxHasher::default();
    grid.hash(&mut hasher);
    hasher.finish()
}
