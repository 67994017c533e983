//! Janus scoring.

use crate::state::{GameState, StateError};

use super::{ranked_by_dots, solo_scores, Scores, ScoringSystem};

/// One point per centre, 60 survival points split among survivors and a
/// 6 point bonus for the board top.
///
/// A lone leader also collects from every other survivor the smaller of
/// the survival share and the leader's margin over second place.
#[derive(Debug, Clone, Default)]
pub struct Janus;

impl Janus {
    const SURVIVAL_PTS: f64 = 60.0;
    const LEADER_PTS: f64 = 6.0;
}

impl ScoringSystem for Janus {
    fn name(&self) -> &str {
        "Janus"
    }

    fn description(&self) -> String {
        format!(
            "Solos score 100 points, everyone else 0.\n\
             Otherwise every power scores 1 point per centre owned.\n\
             Survivors split {} points equally.\n\
             The power(s) topping the board split {} points.\n\
             If one power tops the board alone, every other survivor pays it \
             the smaller of their survival points and the leader's lead in \
             centres over second place.",
            Self::SURVIVAL_PTS,
            Self::LEADER_PTS,
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, 100.0, 0.0));
        }
        let survivors = state.survivors();
        if survivors.is_empty() {
            return Ok(Scores::zero());
        }
        let survival_pts = Self::SURVIVAL_PTS / survivors.len() as f64;
        let ranked = ranked_by_dots(state);
        let leader_dots = ranked[0].1;
        let leaders = state.num_powers_with(leader_dots);

        let mut scores = Scores::from_fn(|p| {
            let dots = state.dot_count(p);
            let mut score = f64::from(dots);
            if dots > 0 {
                score += survival_pts;
            }
            if dots == leader_dots {
                score += Self::LEADER_PTS / leaders as f64;
            }
            score
        });

        if leaders == 1 {
            let leader = ranked[0].0;
            let margin = f64::from(leader_dots - ranked[1].1);
            let payment = survival_pts.min(margin);
            for &p in survivors.iter().filter(|&&p| p != leader) {
                scores.add(p, -payment);
                scores.add(leader, payment);
            }
        }
        Ok(scores)
    }
}
