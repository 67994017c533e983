//! Open Mind the Gap (OMG) scoring.

use crate::state::{GameState, StateError};

use super::{ranked_by_dots, share_rank_points, solo_scores, Scores, ScoringSystem};

/// Centres, survival and top-three points, then tribute to a lone board
/// topper of the gap to second place, capped at half the payer's score.
#[derive(Debug, Clone, Default)]
pub struct OpenMindTheGap;

impl OpenMindTheGap {
    const DOT_PTS: f64 = 1.5;
    const SURVIVAL_PTS: f64 = 9.0;
    const POSITION_PTS: [f64; 3] = [4.5, 3.0, 1.5];
}

impl ScoringSystem for OpenMindTheGap {
    fn name(&self) -> &str {
        "OMG"
    }

    fn description(&self) -> String {
        format!(
            "a) Each supply center (SC) is worth {} points.\n\
             b) Surviving in a draw is worth {} points.\n\
             c) Bonuses for the Top 3: {} points for 1st, {} points for 2nd, {} points for 3rd. \
             If positions are tied, position points are shared between powers.\n\
             d) Tribute paid to a lone board topper is equal to 1st place SCs - 2nd place SCs, \
             capped at 50% of a player's score from a, b and c.\n\
             e) A solo victory is worth 100 points, with others scoring zero.",
            Self::DOT_PTS,
            Self::SURVIVAL_PTS,
            Self::POSITION_PTS[0],
            Self::POSITION_PTS[1],
            Self::POSITION_PTS[2],
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, 100.0, 0.0));
        }
        let ranked = ranked_by_dots(state);
        let (leader, leader_dots) = ranked[0];
        let gap = f64::from(leader_dots - ranked[1].1);
        let lone_leader = state.num_powers_with(leader_dots) == 1;
        let rank_pts = share_rank_points(&ranked, &Self::POSITION_PTS);

        let mut scores = Scores::zero();
        let mut tribute = 0.0;
        for ((power, dots), rank) in ranked.iter().zip(rank_pts) {
            let mut score = Self::DOT_PTS * f64::from(*dots) + rank;
            if *dots > 0 {
                score += Self::SURVIVAL_PTS;
            }
            if lone_leader && *power != leader {
                let paid = gap.min(score / 2.0);
                score -= paid;
                tribute += paid;
            }
            scores.set(*power, score);
        }
        scores.add(leader, tribute);
        Ok(scores)
    }
}
