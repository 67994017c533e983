//! Base 3 scoring.

use crate::state::{GameState, StateError};

use super::{solo_scores, Scores, ScoringSystem};

/// Survival plus centres, and a topping bonus that divides by three for
/// each extra power sharing the top.
#[derive(Debug, Clone, Default)]
pub struct Base3;

impl Base3 {
    const SOLO_PTS: f64 = 46.0;
    const SURVIVAL_PTS: f64 = 3.0;
    const TOPPER_PTS: f64 = 9.0;
}

impl ScoringSystem for Base3 {
    fn name(&self) -> &str {
        "Base 3"
    }

    fn description(&self) -> String {
        format!(
            "1 point per centre.\n\
             {} points for survival.\n\
             {} point bonus for topping the board, divided by 3 for each additional person \
             sharing the top ({} points for lone top, 3 each for 2-way top, 1 each for \
             3-way top, etc).\n\
             Solos score {} points.\n\
             Elimination or loss to a solo scores 0.",
            Self::SURVIVAL_PTS,
            Self::TOPPER_PTS,
            Self::TOPPER_PTS,
            Self::SOLO_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, Self::SOLO_PTS, 0.0));
        }
        let leader_dots = state.highest_dot_count();
        let leaders = state.num_powers_with(leader_dots) as i32;
        let bonus = Self::TOPPER_PTS / 3f64.powi(leaders - 1);
        Ok(Scores::from_fn(|p| {
            let dots = state.dot_count(p);
            let mut score = 0.0;
            if dots > 0 {
                score += Self::SURVIVAL_PTS + f64::from(dots);
            }
            if dots > 0 && dots == leader_dots {
                score += bonus;
            }
            score
        }))
    }
}
