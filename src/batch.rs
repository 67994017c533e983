//! Parallel scoring of many games, or one game under many systems.
//!
//! Systems and states are immutable, so work is split across rayon's
//! global pool with no locking. Results always come back in input order.

use rayon::prelude::*;

use crate::registry::Registry;
use crate::scoring::{Scores, ScoringSystem};
use crate::state::{GameState, StateError};

/// Scores every game in `states` with one system.
pub fn score_games<G>(system: &dyn ScoringSystem, states: &[G]) -> Vec<Result<Scores, StateError>>
where
    G: GameState + Sync,
{
    states.par_iter().map(|state| system.scores(state)).collect()
}

/// Scores one game under every system in `registry`, paired with the
/// system's name.
pub fn score_all<'r>(
    registry: &'r Registry,
    state: &(dyn GameState + Sync),
) -> Vec<(&'r str, Result<Scores, StateError>)> {
    registry
        .systems()
        .par_iter()
        .map(|system| (system.name(), system.scores(state)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;
    use crate::scoring::testutil::{german_solo, opening, three_dead};
    use crate::scoring::DrawSize;
    use crate::state::SnapshotState;

    #[test]
    fn score_games_keeps_input_order() {
        let states: Vec<SnapshotState> = vec![opening(), three_dead(), german_solo()];
        let results = score_games(&DrawSize, &states);
        assert_eq!(results.len(), 3);
        for (state, result) in states.iter().zip(&results) {
            assert_eq!(result.as_ref().unwrap(), &DrawSize.scores(state).unwrap());
        }
    }

    #[test]
    fn score_all_matches_sequential() {
        let state = three_dead();
        let results = score_all(registry(), &state);
        assert_eq!(results.len(), registry().len());
        for ((name, result), system) in results.iter().zip(registry().iter()) {
            assert_eq!(*name, system.name());
            assert_eq!(result, &system.scores(&state));
        }
    }

    #[test]
    fn empty_batch() {
        let states: Vec<SnapshotState> = Vec::new();
        assert!(score_games(&DrawSize, &states).is_empty());
    }
}
