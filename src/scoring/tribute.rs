//! Tribute scoring and OpenTribute.
//!
//! Both make the other powers pay the board leader out of their own score.

use crate::state::{GameState, StateError};

use super::{solo_scores, Scores, ScoringSystem};

/// One point per centre, survivors split 66, and the board leader collects
/// tribute from every other survivor.
#[derive(Debug, Clone, Default)]
pub struct Tribute;

impl Tribute {
    const SURVIVAL_PTS: f64 = 66.0;
    const TRIBUTE_FREE_DOTS: u32 = 6;
}

impl ScoringSystem for Tribute {
    fn name(&self) -> &str {
        "Tribute"
    }

    fn description(&self) -> String {
        format!(
            "1 point per dot, survivors split {} points equally between them.\n\
             Each player pays the board leader(s) 1 point for each dot \
             the leader has over {}. This payment cannot exceed the survival points.\n\
             With a solo, soloer gets 100, everyone else gets 0.",
            Self::SURVIVAL_PTS,
            Self::TRIBUTE_FREE_DOTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, 100.0, 0.0));
        }
        let survivors = state.survivors().len();
        if survivors == 0 {
            return Ok(Scores::zero());
        }
        let survival_pts = Self::SURVIVAL_PTS / survivors as f64;
        let leader_dots = state.highest_dot_count();
        let leaders = state.num_powers_with(leader_dots);
        let tribute = if leader_dots > Self::TRIBUTE_FREE_DOTS {
            survival_pts.min(f64::from(leader_dots - Self::TRIBUTE_FREE_DOTS))
        } else {
            0.0
        };

        Ok(Scores::from_fn(|p| {
            let dots = state.dot_count(p);
            if dots == 0 {
                0.0
            } else if dots == leader_dots {
                f64::from(dots)
                    + survival_pts
                    + tribute * (survivors - leaders) as f64 / leaders as f64
            } else {
                f64::from(dots) + survival_pts - tribute
            }
        }))
    }
}

/// 34 plus 3 per centre, less one point for every centre behind the
/// leader. The leaders share out what was paid.
#[derive(Debug, Clone, Default)]
pub struct OpenTribute;

impl OpenTribute {
    const BASE_PTS: f64 = 34.0;
    const DOT_PTS: f64 = 3.0;
    const SOLO_PTS: f64 = 340.0;
}

impl ScoringSystem for OpenTribute {
    fn name(&self) -> &str {
        "OpenTribute"
    }

    fn description(&self) -> String {
        format!(
            "Base score of {} plus {} points per dot.\n\
             Each player pays the board leader(s) 1 point for each dot \
             the leader has more than them.\n\
             Eliminated players lose all remaining points, scoring zero.\n\
             If the board top is shared by N players, each gets 1/(N^2) of the \
             total tribute, rounded down.\n\
             With a solo, soloer gets {}, everyone else gets 0.",
            Self::BASE_PTS,
            Self::DOT_PTS,
            Self::SOLO_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, Self::SOLO_PTS, 0.0));
        }
        let leader_dots = state.highest_dot_count();
        let leaders = state.num_powers_with(leader_dots) as u32;
        let mut tribute = 0;
        let mut scores = Scores::from_fn(|p| {
            let dots = state.dot_count(p);
            let paid = leader_dots - dots;
            tribute += paid;
            if dots == 0 {
                0.0
            } else {
                Self::BASE_PTS + Self::DOT_PTS * f64::from(dots) - f64::from(paid)
            }
        });
        let share = tribute / (leaders * leaders);
        for p in state.survivors() {
            if state.dot_count(p) == leader_dots {
                scores.add(p, f64::from(share));
            }
        }
        Ok(scores)
    }
}
