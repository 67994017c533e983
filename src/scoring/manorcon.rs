//! ManorCon scoring.

use crate::board::ALL_POWERS;
use crate::state::{GameState, StateError};

use super::{years_played, Scores, ScoringSystem};

/// N value of a dead power, when dead powers count towards the total.
const DEAD_N: f64 = 16.0;

fn manorcon_n(dots: u32) -> f64 {
    let d = f64::from(dots);
    d * d + 4.0 * d + 16.0
}

/// Survivors share 100 points in proportion to `N = S² + 4S + 16`.
/// Everyone who doesn't survive scores 0.1 per year they lasted.
#[derive(Debug, Clone)]
pub struct ManorCon {
    name: String,
    solo_score: f64,
    dead_get_16: bool,
}

impl ManorCon {
    const YEAR_PTS: f64 = 0.1;

    /// `dead_get_16` counts every dead power as N = 16 in the total the
    /// survivors' N values are divided by.
    pub fn new(name: impl Into<String>, solo_score: f64, dead_get_16: bool) -> Self {
        ManorCon {
            name: name.into(),
            solo_score,
            dead_get_16,
        }
    }

    pub fn manorcon() -> Self {
        ManorCon::new("ManorCon", 75.0, false)
    }

    pub fn original() -> Self {
        ManorCon::new("Original ManorCon", 100.0, true)
    }

    pub fn v2() -> Self {
        ManorCon::new("ManorCon v2", 100.0, false)
    }
}

impl ScoringSystem for ManorCon {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let dead_sum = if self.dead_get_16 {
            " (including N=16 for dead powers)"
        } else {
            ""
        };
        format!(
            "Solo gets {}. Others get {} per year they survived.\n\
             Otherwise calculate N = S^2 + 4*S + 16 for each power, \
             where S is their centre-count{}.\n\
             Then each surviving power scores 100 * N/(sum of all Ns), \
             and each dead power still scores {} per year they survived.",
            self.solo_score,
            Self::YEAR_PTS,
            dead_sum,
            Self::YEAR_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let mut scores = Scores::zero();
        if let (Some(soloer), Some(solo_year)) = (state.soloer(), state.solo_year()) {
            for p in ALL_POWERS {
                let score = if p == soloer {
                    self.solo_score
                } else if state.dot_count(p) == 0 {
                    Self::YEAR_PTS * years_played(state.elimination_year_of(p)?)
                } else {
                    Self::YEAR_PTS * years_played(solo_year)
                };
                scores.set(p, score);
            }
            return Ok(scores);
        }

        let mut sum_of_n = 0.0;
        for p in ALL_POWERS {
            let dots = state.dot_count(p);
            if dots == 0 {
                scores.set(p, Self::YEAR_PTS * years_played(state.elimination_year_of(p)?));
                if self.dead_get_16 {
                    sum_of_n += DEAD_N;
                }
            } else {
                sum_of_n += manorcon_n(dots);
            }
        }
        for p in state.survivors() {
            scores.set(p, 100.0 * manorcon_n(state.dot_count(p)) / sum_of_n);
        }
        Ok(scores)
    }
}
