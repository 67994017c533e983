//! Ranked Classic scoring.

use crate::board::ALL_POWERS;
use crate::state::{GameState, StateError};

use super::{lowest_rank_points_two_way, ranked_by_dots, years_played, Scores, ScoringSystem};

/// Centres, survival and a steep rank bonus. Two-way ties have their own
/// table; larger ties drop to the lowest place they cover.
#[derive(Debug, Clone, Default)]
pub struct RankedClassic;

impl RankedClassic {
    const SOLO_PTS: f64 = 550.0;
    const SURVIVAL_PTS: f64 = 30.0;
    const DOT_PTS: f64 = 10.0;
    const POSITION_PTS: [f64; 7] = [200.0, 90.0, 60.0, 40.0, 30.0, 20.0, 10.0];
    const TWO_WAY_PTS: [f64; 6] = [135.0, 70.0, 50.0, 35.0, 25.0, 15.0];
}

impl ScoringSystem for RankedClassic {
    fn name(&self) -> &str {
        "Ranked Classic"
    }

    fn description(&self) -> String {
        let table = Self::POSITION_PTS
            .iter()
            .enumerate()
            .map(|(i, pts)| match Self::TWO_WAY_PTS.get(i) {
                Some(two) => format!("{}: {} ({} if tied by 2 players)", i + 1, pts, two),
                None => format!("{}: {}", i + 1, pts),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Games that end by draw vote or timing out score as follows:\n\
             - Players score {} points per supply center.\n\
             - Eliminated players get 1 point for every year survived.\n\
             - Surviving players get a {} point survival bonus.\n\
             - Surviving players are ranked by their ending supply center count and score \
             a ranking bonus by place: {}.\n\
             If there is a tie for a particular rank between three or more players, \
             those players receive the score for the lowest of their rankings.\n\
             Games that end in solos score as follows:\n\
             - The soloing player gets {} points.\n\
             - All other players get 1 point for every year survived.",
            Self::DOT_PTS,
            Self::SURVIVAL_PTS,
            table,
            Self::SOLO_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let mut scores = Scores::zero();
        if let (Some(soloer), Some(solo_year)) = (state.soloer(), state.solo_year()) {
            for p in ALL_POWERS {
                let score = if p == soloer {
                    Self::SOLO_PTS
                } else if state.dot_count(p) > 0 {
                    // eliminated by the solo
                    years_played(solo_year)
                } else {
                    years_played(state.elimination_year_of(p)?)
                };
                scores.set(p, score);
            }
            return Ok(scores);
        }

        let ranked = ranked_by_dots(state);
        let rank_pts = lowest_rank_points_two_way(&ranked, &Self::POSITION_PTS, &Self::TWO_WAY_PTS);
        for ((power, dots), rank) in ranked.iter().zip(rank_pts) {
            let score = if *dots == 0 {
                years_played(state.elimination_year_of(*power)?)
            } else {
                Self::SURVIVAL_PTS + Self::DOT_PTS * f64::from(*dots) + rank
            };
            scores.set(*power, score);
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testutil::*;

    #[test]
    fn two_way_tie_uses_alternate_table() {
        let scores = RankedClassic.scores(&three_dead()).unwrap();
        assert_scores(&scores, [3.0, 130.0, 5.0, 400.0, 5.0, 130.0, 190.0]);
    }

    #[test]
    fn larger_ties_take_lowest_place() {
        let scores = RankedClassic.scores(&opening()).unwrap();
        assert_scores(&scores, [120.0, 80.0, 120.0, 120.0, 80.0, 120.0, 80.0]);
    }

    #[test]
    fn two_way_top() {
        let state = snapshot(
            [0, 5, 3, 8, 4, 6, 8],
            1904,
            [Some(1904), None, None, None, None, None, None],
        );
        let scores = RankedClassic.scores(&state).unwrap();
        assert_scores(&scores, [3.0, 30.0 + 50.0 + 40.0, 30.0 + 30.0 + 20.0, 245.0, 30.0 + 40.0 + 30.0, 150.0, 245.0]);
    }

    #[test]
    fn solo_scores_years() {
        let scores = RankedClassic.scores(&german_solo()).unwrap();
        assert_scores(&scores, [3.0, 6.0, 5.0, 550.0, 5.0, 6.0, 6.0]);
    }
}
