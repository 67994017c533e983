//! World Classic and Summer Classic scoring.

use crate::state::{GameState, StateError};

use super::{years_played, Scores, ScoringSystem};

/// 10 per centre, 30 for surviving and a 48 point pool for topping the
/// board. Eliminated powers keep a point per year survived whatever the
/// result.
#[derive(Debug, Clone)]
pub struct WorldClassic {
    name: String,
    no_3ways: bool,
}

impl WorldClassic {
    const SOLO_PTS: f64 = 420.0;
    const SURVIVAL_PTS: f64 = 30.0;
    const DOT_PTS: f64 = 10.0;
    const TOPPER_POOL: f64 = 48.0;

    /// `no_3ways` voids the topping pool when three or more powers share
    /// the top.
    pub fn new(name: impl Into<String>, no_3ways: bool) -> Self {
        WorldClassic {
            name: name.into(),
            no_3ways,
        }
    }

    pub fn world_classic() -> Self {
        WorldClassic::new("World Classic", false)
    }

    pub fn summer_classic() -> Self {
        WorldClassic::new("Summer Classic", true)
    }
}

impl ScoringSystem for WorldClassic {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let topping = if self.no_3ways {
            format!(
                "{} extra points for a solo board topper, {} each if 2 people top.",
                Self::TOPPER_POOL,
                Self::TOPPER_POOL / 2.0
            )
        } else {
            format!("{} pool for board topping, split between all toppers.", Self::TOPPER_POOL)
        };
        format!(
            "Solo gets {}. Others get 0.\n\
             Otherwise {} points per SC, {} for surviving to the end/draw.\n\
             {}\n\
             1 point for year survived if eliminated by a non-solo.",
            Self::SOLO_PTS,
            Self::DOT_PTS,
            Self::SURVIVAL_PTS,
            topping,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let soloer = state.soloer();
        let solo_year = state.solo_year();
        let leader_dots = state.highest_dot_count();
        let leaders = state.num_powers_with(leader_dots);
        let mut scores = Scores::zero();
        for p in crate::board::ALL_POWERS {
            let dots = state.dot_count(p);
            let score = if dots == 0 {
                years_played(state.elimination_year_of(p)?)
            } else if let (Some(soloer), Some(year)) = (soloer, solo_year) {
                if p == soloer {
                    Self::SOLO_PTS
                } else {
                    years_played(year)
                }
            } else {
                let mut score = Self::SURVIVAL_PTS + Self::DOT_PTS * f64::from(dots);
                if dots == leader_dots && (!self.no_3ways || leaders < 3) {
                    score += Self::TOPPER_POOL / leaders as f64;
                }
                score
            };
            scores.set(p, score);
        }
        Ok(scores)
    }
}
