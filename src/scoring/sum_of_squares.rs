//! Sum of Squares scoring.

use crate::state::{GameState, StateError};

use super::{solo_scores, Scores, ScoringSystem};

/// Squared centre counts, normalised to 100.
#[derive(Debug, Clone, Default)]
pub struct SumOfSquares;

impl ScoringSystem for SumOfSquares {
    fn name(&self) -> &str {
        "Sum of Squares"
    }

    fn description(&self) -> String {
        "Soloer gets 100 points, everyone else gets zero.\n\
         If there is no solo, square each power's final centre-count \
         and normalise those numbers to sum to 100 points."
            .to_string()
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, 100.0, 0.0));
        }
        let mut scores = Scores::from_fn(|p| {
            let dots = f64::from(state.dot_count(p));
            dots * dots
        });
        scores.normalise(100.0);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testutil::*;

    #[test]
    fn squares_normalised() {
        let scores = SumOfSquares.scores(&three_dead()).unwrap();
        // 25 + 289 + 25 + 49 = 388
        let expected = [0.0, 2500.0 / 388.0, 0.0, 28900.0 / 388.0, 0.0, 2500.0 / 388.0, 4900.0 / 388.0];
        assert_scores(&scores, expected);
        assert_total(&scores, 100.0);
    }

    #[test]
    fn neutral_centres_do_not_change_total() {
        let scores = SumOfSquares.scores(&opening()).unwrap();
        assert_total(&scores, 100.0);
    }

    #[test]
    fn solo() {
        let scores = SumOfSquares.scores(&german_solo()).unwrap();
        assert_scores(&scores, [0.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0]);
    }
}
