//! Only solo victories score.

use crate::state::{GameState, StateError};

use super::{solo_scores, Scores, ScoringSystem};

/// Soloer takes 100, every other result scores nothing.
#[derive(Debug, Clone, Default)]
pub struct SoloOrBust;

impl ScoringSystem for SoloOrBust {
    fn name(&self) -> &str {
        "Solo or bust"
    }

    fn description(&self) -> String {
        "Only solo victories get points.\n\
         Solos score 100 points.\n\
         Other results score 0."
            .to_string()
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        Ok(match state.soloer() {
            Some(soloer) => solo_scores(soloer, 100.0, 0.0),
            None => Scores::zero(),
        })
    }
}
