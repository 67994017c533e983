//! Bangkok and Bangkok Pike scoring.

use crate::board::ALL_POWERS;
use crate::state::{GameState, StateError};

use super::{years_played, Scores, ScoringSystem};

/// Centres plus a 12 point domination bonus shared among the powers at or
/// near the top of the board.
#[derive(Debug, Clone, Default)]
pub struct Bangkok;

impl Bangkok {
    const SOLO_PTS: f64 = 41.0;
    const SOLO_LOSS_DOT_PTS: f64 = 0.5;
    const DOMINATION_PTS: f64 = 12.0;
    const SURVIVAL_PTS: f64 = 3.0;
    const YEAR_PTS: f64 = 0.3;

    fn shares(dots: u32, leader_dots: u32) -> u32 {
        match leader_dots - dots {
            0 => 3,
            1 => 2,
            2 => 1,
            _ => 0,
        }
    }
}

impl ScoringSystem for Bangkok {
    fn name(&self) -> &str {
        "Bangkok"
    }

    fn description(&self) -> String {
        format!(
            "In a draw:\n\
             - Everyone gets 1 point per centre.\n\
             - {} points is divided between dominating players: \
             3 shares to topping players, 2 shares to players 1 centre from the top, \
             1 share to players 2 centres from the top.\n\
             - {} points to all surviving players.\n\
             - {} points per year survived for eliminated players.\n\
             In a solo:\n\
             - Soloer gets {} points.\n\
             - Everyone else gets {} points per centre.",
            Self::DOMINATION_PTS,
            Self::SURVIVAL_PTS,
            Self::YEAR_PTS,
            Self::SOLO_PTS,
            Self::SOLO_LOSS_DOT_PTS,
        )
    }

    fn dead_score_can_change(&self) -> bool {
        true
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(Scores::from_fn(|p| {
                if p == soloer {
                    Self::SOLO_PTS
                } else {
                    Self::SOLO_LOSS_DOT_PTS * f64::from(state.dot_count(p))
                }
            }));
        }
        let leader_dots = state.highest_dot_count();
        let total_shares: u32 = ALL_POWERS
            .into_iter()
            .map(|p| Self::shares(state.dot_count(p), leader_dots))
            .sum();
        let mut scores = Scores::zero();
        for p in ALL_POWERS {
            let dots = state.dot_count(p);
            let mut score = f64::from(dots)
                + Self::DOMINATION_PTS * f64::from(Self::shares(dots, leader_dots))
                    / f64::from(total_shares);
            if dots == 0 {
                score += Self::YEAR_PTS * years_played(state.elimination_year_of(p)?);
            } else {
                score += Self::SURVIVAL_PTS;
            }
            scores.set(p, score);
        }
        Ok(scores)
    }
}

/// Bangkok with fixed bonuses rather than shares, and a pity point per
/// ten years played for eliminated powers.
#[derive(Debug, Clone, Default)]
pub struct BangkokPike;

impl BangkokPike {
    const SOLO_PTS: f64 = 60.0;
    const LONE_TOPPER_PTS: f64 = 6.0;
    const SHARED_TOP_PTS: f64 = 4.0;
    const ONE_BEHIND_PTS: f64 = 4.0;
    const TWO_BEHIND_PTS: f64 = 2.0;
    const SURVIVAL_PTS: f64 = 3.0;
    const YEAR_PTS: f64 = 0.1;

    /// Pity points for playing through the end of `year`.
    fn pity(year: u16) -> f64 {
        Self::YEAR_PTS * (1.0 + years_played(year))
    }
}

impl ScoringSystem for BangkokPike {
    fn name(&self) -> &str {
        "Bangkok Pike"
    }

    fn description(&self) -> String {
        format!(
            "In a draw:\n\
             - {} points for having at least 1 supply centre.\n\
             - 1 point per supply centre.\n\
             - Lone board topper gets a {} point bonus.\n\
             - If 2 or more players are tied for top, they each get {} points.\n\
             - Everyone with exactly 1 centre less than the board topper(s) gets a {} point bonus. \
             If there's a lone board topper and nobody has exactly 1 centre less, \
             the board topper also gets this bonus.\n\
             - Everyone with exactly 2 centres less than the board topper(s) gets a {} point bonus. \
             If there's a lone board topper and nobody has exactly 2 centres less, \
             the board topper also gets this bonus.\n\
             - Eliminated players get {} points for each game year they played.\n\
             In a solo:\n\
             - Soloer gets {} points.\n\
             - Everyone else gets points as if they were eliminated.",
            Self::SURVIVAL_PTS,
            Self::LONE_TOPPER_PTS,
            Self::SHARED_TOP_PTS,
            Self::ONE_BEHIND_PTS,
            Self::TWO_BEHIND_PTS,
            Self::YEAR_PTS,
            Self::SOLO_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let mut scores = Scores::zero();
        if let (Some(soloer), Some(solo_year)) = (state.soloer(), state.solo_year()) {
            for p in ALL_POWERS {
                let score = if p == soloer {
                    Self::SOLO_PTS
                } else if state.dot_count(p) == 0 {
                    Self::pity(state.elimination_year_of(p)?)
                } else {
                    Self::pity(solo_year)
                };
                scores.set(p, score);
            }
            return Ok(scores);
        }

        let leader_dots = state.highest_dot_count();
        let toppers = state.num_powers_with(leader_dots);
        let nobody_at = |behind: u32| match leader_dots.checked_sub(behind) {
            Some(dots) => state.num_powers_with(dots) == 0,
            None => true,
        };
        for p in ALL_POWERS {
            let dots = state.dot_count(p);
            let mut score = f64::from(dots);
            match leader_dots - dots {
                0 if toppers == 1 => {
                    score += Self::LONE_TOPPER_PTS;
                    if nobody_at(1) {
                        score += Self::ONE_BEHIND_PTS;
                    }
                    if nobody_at(2) {
                        score += Self::TWO_BEHIND_PTS;
                    }
                }
                0 => score += Self::SHARED_TOP_PTS,
                1 => score += Self::ONE_BEHIND_PTS,
                2 => score += Self::TWO_BEHIND_PTS,
                _ => {}
            }
            if dots == 0 {
                score += Self::pity(state.elimination_year_of(p)?);
            } else {
                score += Self::SURVIVAL_PTS;
            }
            scores.set(p, score);
        }
        Ok(scores)
    }
}
