//! Vulcan scoring.

use crate::board::ALL_POWERS;
use crate::state::{GameState, StateError};

use super::{Scores, ScoringSystem};

/// Centres, survival, a point for every centre of margin over each lower
/// power, and a topping bonus.
#[derive(Debug, Clone, Default)]
pub struct Vulcan;

impl Vulcan {
    const SOLO_PTS: f64 = 130.0;
    const SURVIVAL_PTS: f64 = 5.0;
    const TOPPER_PTS: f64 = 10.0;

    /// Total lead a power on `dots` centres has over every power with fewer.
    fn margin(state: &dyn GameState, dots: u32) -> u32 {
        ALL_POWERS
            .into_iter()
            .map(|p| state.dot_count(p))
            .filter(|&other| other < dots)
            .map(|other| dots - other)
            .sum()
    }
}

impl ScoringSystem for Vulcan {
    fn name(&self) -> &str {
        "Vulcan"
    }

    fn description(&self) -> String {
        format!(
            "Eliminated players score zero.\n\
             If there is a solo:\n\
             - Soloers get {} points.\n\
             - Losers to a solo get {} points if they survived.\n\
             Otherwise, players score as follows:\n\
             - 1 point per centre.\n\
             - 1 point for each centre between you and everyone below you \
             (including eliminated players).\n\
             - {} point bonus for topping, split between topping players if there's a joint top.\n\
             - {} points for surviving the game.",
            Self::SOLO_PTS,
            Self::SURVIVAL_PTS,
            Self::TOPPER_PTS,
            Self::SURVIVAL_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let soloer = state.soloer();
        let leader_dots = state.highest_dot_count();
        let toppers = state.num_powers_with(leader_dots) as f64;
        Ok(Scores::from_fn(|p| {
            let dots = state.dot_count(p);
            match soloer {
                Some(s) if s == p => Self::SOLO_PTS,
                _ if dots == 0 => 0.0,
                Some(_) => Self::SURVIVAL_PTS,
                None => {
                    let mut score = f64::from(dots)
                        + Self::SURVIVAL_PTS
                        + f64::from(Self::margin(state, dots));
                    if dots == leader_dots {
                        score += Self::TOPPER_PTS / toppers;
                    }
                    score
                }
            }
        }))
    }
}
