//! Southern Sun scoring.

use crate::state::{GameState, StateError};

use super::{ranked_by_dots, share_rank_points, solo_scores, Scores, ScoringSystem};

/// Survival, centres and Fibonacci-style rank points over the places the
/// survivors occupy. Shared ranks are rounded to a whole number.
#[derive(Debug, Clone, Default)]
pub struct SouthernSun;

impl SouthernSun {
    const SOLO_PTS: f64 = 500.0;
    const SURVIVAL_PTS: f64 = 30.0;
    const DOT_PTS: f64 = 10.0;
    const YEAR_PTS: f64 = 3.0;
    const POSITION_PTS: [f64; 7] = [130.0, 80.0, 50.0, 30.0, 20.0, 10.0, 10.0];
}

impl ScoringSystem for SouthernSun {
    fn name(&self) -> &str {
        "Southern Sun"
    }

    fn description(&self) -> String {
        let ranks = Self::POSITION_PTS
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "In a draw: {} points for surviving players at the end of the game, \
             {} points per centre, then ranking points of {} for 1st to 7th.\n\
             Players on an equal number of centres share the average of their ranks \
             (rounded to the nearest whole number, where relevant).\n\
             Eliminated players receive {} points per game year played; no place bonus.\n\
             In a solo: Winner receives {} points; all other players receive zero points.",
            Self::SURVIVAL_PTS,
            Self::DOT_PTS,
            ranks,
            Self::YEAR_PTS,
            Self::SOLO_PTS,
        )
    }

    fn dead_score_can_change(&self) -> bool {
        true
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, Self::SOLO_PTS, 0.0));
        }
        let ranked = ranked_by_dots(state);
        let places = state.survivors().len();
        let rank_pts = share_rank_points(&ranked, &Self::POSITION_PTS[..places]);
        let mut scores = Scores::zero();
        for ((power, dots), rank) in ranked.iter().zip(rank_pts) {
            let score = if *dots > 0 {
                Self::SURVIVAL_PTS + Self::DOT_PTS * f64::from(*dots) + rank.round_ties_even()
            } else {
                let year = state.elimination_year_of(*power)?;
                Self::YEAR_PTS * (1.0 + super::years_played(year))
            };
            scores.set(*power, score);
        }
        Ok(scores)
    }
}
