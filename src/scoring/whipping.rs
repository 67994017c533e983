//! Whipping scoring.

use crate::board::{ALL_POWERS, FIRST_YEAR};
use crate::state::{GameState, StateError};

use super::{Scores, ScoringSystem};

/// Years played in full, counting the year of elimination.
fn years_including(year: u16) -> f64 {
    f64::from(year) - f64::from(FIRST_YEAR - 1)
}

/// Ten per centre, 60 survival points split among survivors and double
/// centres for a lone board topper.
#[derive(Debug, Clone)]
pub struct Whipping {
    name: String,
    soloer_pts: f64,
}

impl Whipping {
    const DOT_PTS: f64 = 10.0;
    const SURVIVAL_PTS: f64 = 60.0;
    const TOPPER_DOT_PTS: f64 = 2.0;

    pub fn new(name: impl Into<String>, soloer_pts: f64) -> Self {
        Whipping {
            name: name.into(),
            soloer_pts,
        }
    }

    pub fn whipping() -> Self {
        Whipping::new("Whipping", 468.0)
    }
}

impl ScoringSystem for Whipping {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "If there is a solo:\n\
             - Soloers score {}.\n\
             - Survivors who lose to a solo score as if they were eliminated when the solo occurred.\n\
             Otherwise:\n\
             - Eliminated powers get one point per year played.\n\
             - Everyone gets {} points per centre owned.\n\
             - Surviving powers share {} points equally between them.\n\
             - The power with the most centres gets a bonus of twice the number of SCs owned.\n\
             - If multiple powers are tied for board top, no board topping bonus is awarded.",
            self.soloer_pts,
            Self::DOT_PTS,
            Self::SURVIVAL_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let soloer = state.soloer().zip(state.solo_year());
        let survivors = state.survivors().len();
        let leader_dots = state.highest_dot_count();
        let lone_leader = state.num_powers_with(leader_dots) == 1;
        let mut scores = Scores::zero();
        for p in ALL_POWERS {
            let dots = state.dot_count(p);
            let score = match soloer {
                _ if dots == 0 => years_including(state.elimination_year_of(p)?),
                Some((s, _)) if s == p => self.soloer_pts,
                Some((_, year)) => years_including(year),
                None => {
                    let mut score =
                        Self::DOT_PTS * f64::from(dots) + Self::SURVIVAL_PTS / survivors as f64;
                    if dots == leader_dots && lone_leader {
                        score += Self::TOPPER_DOT_PTS * f64::from(dots);
                    }
                    score
                }
            };
            scores.set(p, score);
        }
        Ok(scores)
    }
}
