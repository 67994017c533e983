//! Properties every registered scoring system must satisfy.
//!
//! Runs each system in the standard registry over a set of game endings
//! and checks totals, solo handling, symmetry between powers, freedom
//! from hidden state and the `dead_score_can_change` flag.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use palmerston::board::{Power, ALL_POWERS, POWER_COUNT};
use palmerston::registry::registry;
use palmerston::samples::SAMPLE_GAMES;
use palmerston::scoring::Scores;
use palmerston::state::{ChartState, GameState, SnapshotState};

const TOLERANCE: f64 = 1e-6;

/// Year-by-year chart ending in a German solo in 1907.
fn solo_chart() -> ChartState {
    let mut years = BTreeMap::new();
    years.insert(1901, [5, 4, 5, 5, 4, 5, 4]);
    years.insert(1902, [4, 4, 4, 6, 4, 6, 6]);
    years.insert(1904, [0, 5, 4, 8, 4, 5, 8]);
    years.insert(1905, [0, 5, 3, 13, 3, 4, 6]);
    years.insert(1906, [0, 5, 0, 17, 0, 5, 7]);
    years.insert(1907, [0, 4, 0, 18, 0, 5, 7]);
    ChartState::new(years, None).unwrap()
}

/// Every sample ending plus a few boards of our own.
fn endings() -> Vec<SnapshotState> {
    let mut states: Vec<SnapshotState> =
        SAMPLE_GAMES.iter().map(|g| g.state().unwrap()).collect();
    states.push(SnapshotState::new([5, 4, 5, 5, 4, 5, 4], 1901, [None; POWER_COUNT], None).unwrap());
    states.push(
        SnapshotState::new(
            [0, 5, 0, 17, 0, 5, 7],
            1906,
            [Some(1904), None, Some(1906), None, Some(1906), None, None],
            None,
        )
        .unwrap(),
    );
    states.push(
        SnapshotState::new(
            [0, 4, 0, 18, 0, 5, 7],
            1907,
            [Some(1904), None, Some(1906), None, Some(1906), None, None],
            None,
        )
        .unwrap(),
    );
    states
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[test]
fn every_system_scores_every_ending() {
    for state in endings() {
        for system in registry().iter() {
            let scores = system
                .scores(&state)
                .unwrap_or_else(|e| panic!("{}: {}", system.name(), e));
            assert_eq!(scores.iter().count(), POWER_COUNT);
            for (power, score) in scores.iter() {
                assert!(score.is_finite(), "{} gave {} {}", system.name(), power, score);
            }
        }
    }
}

#[test]
fn chart_games_score_like_snapshots_where_history_is_unused() {
    let chart = solo_chart().truncated(1906).unwrap();
    let snapshot = SnapshotState::new(
        [0, 5, 0, 17, 0, 5, 7],
        1906,
        [Some(1904), None, Some(1906), None, Some(1906), None, None],
        None,
    )
    .unwrap();
    for name in ["Draw size", "CDiplo 100", "Carnage with elimination order", "Tribute"] {
        let system = registry().find(name).unwrap();
        assert_eq!(system.scores(&chart), system.scores(&snapshot), "{}", name);
    }
}

#[test]
fn fixed_totals_without_neutral_centres() {
    let state = SnapshotState::new([6, 5, 5, 4, 4, 5, 5], 1919, [None; POWER_COUNT], None).unwrap();
    let expected = [
        ("Draw size", 100.0),
        ("CDiplo 100", 100.0),
        ("CDiplo 80", 80.0),
        ("Sum of Squares", 100.0),
        ("Janus", 100.0),
        ("Tribute", 100.0),
        ("ManorCon", 100.0),
        ("Original ManorCon", 100.0),
        ("ManorCon v2", 100.0),
        ("World Classic", 598.0),
        ("Carnage with dead equal", 28034.0),
    ];
    for (name, total) in expected {
        let scores = registry().find(name).unwrap().scores(&state).unwrap();
        assert!(close(scores.total(), total), "{}: total {}", name, scores.total());
    }
}

#[test]
fn per_centre_totals_undershoot_by_neutrals() {
    // Two neutral centres.
    let state = SnapshotState::new([5, 5, 5, 5, 4, 4, 4], 1901, [None; POWER_COUNT], None).unwrap();
    let cdiplo = registry().find("CDiplo 100").unwrap().scores(&state).unwrap();
    assert!(close(cdiplo.total(), 98.0));
    let carnage = registry()
        .find("Carnage with dead equal")
        .unwrap()
        .scores(&state)
        .unwrap();
    assert!(close(carnage.total(), 28032.0));
}

#[test]
fn soloer_always_scores_highest() {
    let states: Vec<SnapshotState> = endings()
        .into_iter()
        .filter(|s| s.is_solo())
        .collect();
    assert!(!states.is_empty());
    for state in &states {
        let soloer = state.soloer().unwrap();
        for system in registry().iter() {
            let scores = system.scores(state).unwrap();
            for (power, score) in scores.iter() {
                if power != soloer {
                    assert!(
                        score < scores[soloer],
                        "{}: {} scored {} against soloer's {}",
                        system.name(),
                        power,
                        score,
                        scores[soloer]
                    );
                }
            }
        }
    }
}

#[test]
fn concession_scores_like_a_solo() {
    let draw = palmerston::state::Draw::new([Power::Germany], 1906).unwrap();
    let conceded = SnapshotState::new(
        [0, 5, 0, 17, 0, 5, 7],
        1906,
        [Some(1904), None, Some(1906), None, Some(1906), None, None],
        Some(draw),
    )
    .unwrap();
    for name in ["Solo or bust", "Draw size", "Sum of Squares", "Janus"] {
        let scores = registry().find(name).unwrap().scores(&conceded).unwrap();
        assert!(close(scores[Power::Germany], 100.0), "{}", name);
        assert!(close(scores.total(), 100.0), "{}", name);
    }
}

/// Relabels the powers of `state` by `perm`: power `i` becomes `perm[i]`.
fn relabel(state: &SnapshotState, perm: &[Power]) -> SnapshotState {
    let mut counts = [0; POWER_COUNT];
    let mut eliminations = [None; POWER_COUNT];
    for p in ALL_POWERS {
        let to = perm[p.index()].index();
        counts[to] = state.dot_count(p);
        eliminations[to] = state.year_eliminated(p);
    }
    SnapshotState::new(counts, state.final_year(), eliminations, None).unwrap()
}

#[test]
fn scores_follow_powers_not_positions() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for state in endings() {
        for _ in 0..4 {
            let mut perm = ALL_POWERS.to_vec();
            perm.shuffle(&mut rng);
            let shuffled = relabel(&state, &perm);
            for system in registry().iter() {
                let before = system.scores(&state).unwrap();
                let after = system.scores(&shuffled).unwrap();
                for p in ALL_POWERS {
                    let moved = perm[p.index()];
                    assert!(
                        close(before[p], after[moved]),
                        "{}: {} scored {} but as {} scored {}",
                        system.name(),
                        p,
                        before[p],
                        moved,
                        after[moved]
                    );
                }
            }
        }
    }
}

#[test]
fn scoring_leaves_no_trace() {
    let states = endings();
    for system in registry().iter() {
        let first: Vec<Scores> = states.iter().map(|s| system.scores(s).unwrap()).collect();
        let again: Vec<Scores> = states
            .iter()
            .rev()
            .map(|s| system.scores(s).unwrap())
            .collect();
        let rev: Vec<Scores> = again.into_iter().rev().collect();
        assert_eq!(first, rev, "{}", system.name());
    }
}

#[test]
fn dead_score_flag_matches_behaviour() {
    let full = solo_chart();
    let before_solo = full.truncated(1906).unwrap();
    assert!(full.is_solo());
    assert!(!before_solo.is_solo());
    assert_eq!(before_solo.year_eliminated(Power::France), Some(1906));
    for system in registry().iter() {
        let early = system.scores(&before_solo).unwrap()[Power::France];
        let late = system.scores(&full).unwrap()[Power::France];
        let changed = !close(early, late);
        assert_eq!(
            changed,
            system.dead_score_can_change(),
            "{}: France went from {} to {}",
            system.name(),
            early,
            late
        );
    }
}
