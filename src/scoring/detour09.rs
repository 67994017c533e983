//! Detour09 scoring.

use crate::board::ALL_POWERS;
use crate::state::{GameState, StateError};

use super::{ranked_by_dots, years_played, Scores, ScoringSystem};

/// Centres, survival, the leader's gap and position points, normalised to
/// 100. Eliminated powers and losers to a solo also get a little for each
/// year survived.
#[derive(Debug, Clone, Default)]
pub struct Detour09;

impl Detour09 {
    const SOLO_PTS: f64 = 110.0;
    const SURVIVAL_PTS: f64 = 2.0;
    const FIRST_PLACE_PTS: u32 = 4;
    const PLACES: usize = 4;
    const YEAR_PTS: f64 = 0.25;
    const MAX_YEARS: f64 = 8.0;

    fn survival_year_points(year: u16) -> f64 {
        Self::YEAR_PTS * years_played(year).min(Self::MAX_YEARS)
    }

    fn draw_scores(state: &dyn GameState) -> Scores {
        let ranked = ranked_by_dots(state);
        let leader_dots = ranked[0].1;
        let gap = f64::from(leader_dots - ranked[1].1);
        let mut scores = Scores::from_fn(|p| {
            let dots = state.dot_count(p);
            let mut score = f64::from(dots);
            if dots > 0 {
                score += Self::SURVIVAL_PTS;
            }
            if dots == leader_dots {
                score += gap;
            }
            score
        });

        // Tied powers all take the lower place's points
        let mut i = 0;
        let mut bonus = Self::FIRST_PLACE_PTS;
        while bonus > 0 && i < Self::PLACES {
            let tied = state.num_powers_with(ranked[i].1);
            if tied > Self::PLACES {
                break;
            }
            let award = bonus.saturating_sub(tied as u32 - 1);
            if award > 0 {
                for (power, _) in &ranked[i..i + tied] {
                    scores.add(*power, f64::from(award));
                }
            }
            i += tied;
            bonus = award.saturating_sub(1);
        }

        scores.normalise(100.0);
        scores
    }
}

impl ScoringSystem for Detour09 {
    fn name(&self) -> &str {
        "Detour09"
    }

    fn description(&self) -> String {
        format!(
            "Soloer gets {}.\n\
             Otherwise, players get 1 per centre held, plus {} points if they hold any centres. \
             If there's a single board topper, that player gets points equal to the difference \
             between their centre count and that of the player(s) immediately behind them.\n\
             Leader gets 4 points, 2nd gets 3, 3rd gets 2 and 4th gets 1. If players are tied \
             for position, they all get the lower position points.\n\
             Finally, scores for a game without a solo are normalised to be out of 100.\n\
             Eliminated players and those who lose to a solo get {} points per year of survival, \
             to a maximum of {} points.",
            Self::SOLO_PTS,
            Self::SURVIVAL_PTS,
            Self::YEAR_PTS,
            Self::YEAR_PTS * Self::MAX_YEARS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let soloer = state.soloer();
        let mut scores = match soloer {
            Some(soloer) => super::solo_scores(soloer, Self::SOLO_PTS, 0.0),
            None => Self::draw_scores(state),
        };
        for p in ALL_POWERS {
            let year = if state.dot_count(p) == 0 {
                state.elimination_year_of(p)?
            } else if soloer.is_some_and(|s| s != p) {
                match state.solo_year() {
                    Some(year) => year,
                    None => continue,
                }
            } else {
                continue;
            };
            scores.add(p, Self::survival_year_points(year));
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testutil::*;

    #[test]
    fn shared_places_take_lower_points() {
        let state = snapshot(
            [0, 5, 4, 8, 4, 5, 8],
            1904,
            [Some(1904), None, None, None, None, None, None],
        );
        let scores = Detour09.scores(&state).unwrap();
        let total = 6.0 + 6.0 + 8.0 + 8.0 + 13.0 + 13.0;
        assert_scores(
            &scores,
            [
                0.75,
                800.0 / total,
                600.0 / total,
                1300.0 / total,
                600.0 / total,
                800.0 / total,
                1300.0 / total,
            ],
        );
    }

    #[test]
    fn lone_leader_gets_gap() {
        let state = snapshot(
            [0, 5, 3, 13, 3, 4, 6],
            1905,
            [Some(1904), None, None, None, None, None, None],
        );
        let scores = Detour09.scores(&state).unwrap();
        let total = 5.0 + 5.0 + 7.0 + 9.0 + 11.0 + 26.0;
        assert_scores(
            &scores,
            [
                0.75,
                900.0 / total,
                500.0 / total,
                2600.0 / total,
                500.0 / total,
                700.0 / total,
                1100.0 / total,
            ],
        );
    }

    #[test]
    fn three_equal_top() {
        let state = snapshot([4, 4, 4, 6, 4, 6, 6], 1902, ALIVE);
        let scores = Detour09.scores(&state).unwrap();
        let total = 4.0 * 6.0 + 3.0 * 10.0;
        let (low, high) = (600.0 / total, 1000.0 / total);
        assert_scores(&scores, [low, low, low, high, low, high, high]);
    }

    #[test]
    fn four_equal_top() {
        let scores = Detour09.scores(&opening()).unwrap();
        let total = 3.0 * 6.0 + 4.0 * 8.0;
        let (low, high) = (600.0 / total, 800.0 / total);
        assert_scores(&scores, [high, low, high, high, low, high, low]);
    }

    #[test]
    fn survival_points_are_capped() {
        let state = snapshot(
            [0, 4, 0, 18, 0, 5, 7],
            1910,
            [Some(1904), None, Some(1909), None, Some(1909), None, None],
        );
        let scores = Detour09.scores(&state).unwrap();
        assert_scores(&scores, [0.75, 2.0, 2.0, 110.0, 2.0, 2.0, 2.0]);
    }
}
