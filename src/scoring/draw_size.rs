//! Draw-size scoring.

use crate::state::{GameState, StateError};

use super::{solo_scores, Scores, ScoringSystem};

/// Draw sharers split 100 points equally.
///
/// Without a passed draw every survivor counts as a sharer.
#[derive(Debug, Clone, Default)]
pub struct DrawSize;

impl ScoringSystem for DrawSize {
    fn name(&self) -> &str {
        "Draw size"
    }

    fn description(&self) -> String {
        "Solos score 100 points.\n\
         Draw sharers split 100 points between them.\n\
         If no draw passed, all survivors share the 100 points."
            .to_string()
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, 100.0, 0.0));
        }
        let sharers = state.powers_in_draw();
        if sharers.is_empty() {
            return Ok(Scores::zero());
        }
        let share = 100.0 / sharers.len() as f64;
        Ok(Scores::from_fn(|p| if sharers.contains(&p) { share } else { 0.0 }))
    }
}
