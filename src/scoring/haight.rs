//! Haight v1.0 scoring.

use crate::board::{Power, ALL_POWERS};
use crate::state::{GameState, StateError};

use super::{lowest_rank_points, years_played, Scores, ScoringSystem};

/// Ten points per centre, a year point per year played for the eliminated
/// and rank points where ties take the lower rank.
#[derive(Debug, Clone, Default)]
pub struct Haight;

impl Haight {
    const SOLO_PTS: f64 = 451.0;
    const DOT_PTS: f64 = 10.0;
    const SOLO_LOSS_DOT_PTS: f64 = 5.0;
    const LEAD_PTS: f64 = 5.0;
    const POSITION_PTS: [f64; 6] = [66.0, 55.0, 44.0, 33.0, 22.0, 11.0];

    /// Points for playing up to and including `year`.
    fn years_points(year: u16) -> f64 {
        1.0 + years_played(year)
    }

    fn solo_scores(state: &dyn GameState, soloer: Power, solo_year: u16) -> Result<Scores, StateError> {
        let mut scores = Scores::zero();
        for p in ALL_POWERS {
            let dots = state.dot_count(p);
            let score = if p == soloer {
                Self::SOLO_PTS
            } else if dots > 0 {
                (Self::SOLO_LOSS_DOT_PTS * f64::from(dots)).max(Self::years_points(solo_year))
            } else {
                Self::years_points(state.elimination_year_of(p)?)
            };
            scores.set(p, score);
        }
        Ok(scores)
    }
}

impl ScoringSystem for Haight {
    fn name(&self) -> &str {
        "Haight v1.0"
    }

    fn description(&self) -> String {
        let ranks = Self::POSITION_PTS
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Games that end by draw vote or timing out score as follows:\n\
             - Players score {} points per supply center.\n\
             - Eliminated players get 1 point for every year played.\n\
             - Players are ranked by their ending supply center count or order of elimination \
             and score a ranking bonus of {} for 1st to 6th place, 0 for 7th. \
             If there is a tie for a particular rank, all tied players receive the score for \
             the lowest of their ranks.\n\
             - A single player topping the board receives a bonus of {} times the difference \
             between their SC count and the next highest SC count.\n\
             Games that end in solos score as follows:\n\
             - The soloing player gets {} points.\n\
             - Surviving players get {} points per SC, or points equal to the number of years \
             played, whichever is greater.\n\
             - Eliminated players score 1 point for every year they played, including the year \
             eliminated.\n\
             - Ranking points are not awarded.",
            Self::DOT_PTS,
            ranks,
            Self::LEAD_PTS,
            Self::SOLO_PTS,
            Self::SOLO_LOSS_DOT_PTS,
        )
    }

    fn dead_score_can_change(&self) -> bool {
        true
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let (Some(soloer), Some(solo_year)) = (state.soloer(), state.solo_year()) {
            return Self::solo_scores(state, soloer, solo_year);
        }

        // Eliminated powers rank below every survivor, later eliminations
        // higher, via a fractional metric.
        let mut ranked = Vec::with_capacity(ALL_POWERS.len());
        for p in ALL_POWERS {
            let dots = state.dot_count(p);
            let metric = if dots > 0 {
                f64::from(dots)
            } else {
                years_played(state.elimination_year_of(p)?) / 100.0
            };
            ranked.push((p, metric));
        }
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let rank_pts = lowest_rank_points(&ranked, &Self::POSITION_PTS);
        let mut scores = Scores::zero();
        for ((power, _), rank) in ranked.iter().zip(rank_pts) {
            let dots = state.dot_count(*power);
            let base = if dots > 0 {
                Self::DOT_PTS * f64::from(dots)
            } else {
                Self::years_points(state.elimination_year_of(*power)?)
            };
            scores.set(*power, base + rank);
        }
        if ranked[0].1 != ranked[1].1 {
            scores.add(ranked[0].0, Self::LEAD_PTS * (ranked[0].1 - ranked[1].1));
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testutil::*;

    fn game(counts: [u32; 7], eliminations: [Option<u16>; 7]) -> crate::state::SnapshotState {
        snapshot(counts, 1908, eliminations)
    }

    #[test]
    fn distinct_ranks_with_lead_bonus() {
        let state = game(
            [0, 10, 9, 8, 5, 0, 2],
            [Some(1904), None, None, None, None, Some(1908), None],
        );
        let scores = Haight.scores(&state).unwrap();
        assert_scores(&scores, [4.0, 171.0, 145.0, 124.0, 83.0, 19.0, 42.0]);
    }

    #[test]
    fn same_year_eliminations_tie() {
        let state = game(
            [0, 17, 0, 10, 4, 0, 3],
            [Some(1904), None, Some(1908), None, None, Some(1908), None],
        );
        let scores = Haight.scores(&state).unwrap();
        assert_scores(&scores, [4.0, 271.0, 19.0, 155.0, 84.0, 19.0, 63.0]);
    }

    #[test]
    fn three_way_top_takes_third_place() {
        let state = game(
            [0, 11, 0, 11, 11, 0, 1],
            [Some(1904), None, Some(1908), None, None, Some(1908), None],
        );
        let scores = Haight.scores(&state).unwrap();
        assert_scores(&scores, [4.0, 154.0, 19.0, 154.0, 154.0, 19.0, 43.0]);
    }

    #[test]
    fn dead_ranked_by_elimination_year() {
        let state = game(
            [0, 12, 0, 11, 11, 0, 0],
            [Some(1904), None, Some(1908), None, None, Some(1907), Some(1907)],
        );
        let scores = Haight.scores(&state).unwrap();
        assert_scores(&scores, [4.0, 191.0, 41.0, 154.0, 154.0, 18.0, 18.0]);
    }

    #[test]
    fn two_way_second_place() {
        let state = game(
            [0, 12, 0, 10, 10, 0, 2],
            [Some(1904), None, Some(1908), None, None, Some(1908), None],
        );
        let scores = Haight.scores(&state).unwrap();
        assert_scores(&scores, [4.0, 196.0, 19.0, 144.0, 144.0, 19.0, 53.0]);
    }

    #[test]
    fn solo_uses_greater_of_centres_and_years() {
        let state = snapshot(
            [0, 18, 0, 10, 4, 0, 2],
            1911,
            [Some(1904), None, Some(1908), None, None, Some(1908), None],
        );
        let scores = Haight.scores(&state).unwrap();
        assert_scores(&scores, [4.0, 451.0, 8.0, 50.0, 20.0, 8.0, 11.0]);
    }
}
