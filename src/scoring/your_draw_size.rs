//! Your Draw Size scoring.

use crate::state::{GameState, StateError};

use super::{solo_scores, Scores, ScoringSystem};

/// Points by centre-count band.
#[derive(Debug, Clone)]
pub struct YourDrawSize {
    name: String,
    soloer_pts: f64,
}

/// Lowest centre count of each band, and the points for it.
const BANDS: [(u32, f64); 6] = [
    (14, 105.0),
    (11, 70.0),
    (8, 42.0),
    (4, 30.0),
    (1, 21.0),
    (0, 0.0),
];

fn band_points(dots: u32) -> f64 {
    BANDS
        .iter()
        .find(|(min, _)| dots >= *min)
        .map_or(0.0, |(_, pts)| *pts)
}

impl YourDrawSize {
    pub fn new(name: impl Into<String>, soloer_pts: f64) -> Self {
        YourDrawSize {
            name: name.into(),
            soloer_pts,
        }
    }

    pub fn short_games() -> Self {
        YourDrawSize::new("Your Draw Size (short games)", 300.0)
    }

    pub fn unlimited_games() -> Self {
        YourDrawSize::new("Your Draw Size (unlimited games)", 320.0)
    }
}

impl ScoringSystem for YourDrawSize {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "If there is a solo:\n\
             - Soloers score {} points.\n\
             - Losers to a solo get zero.\n\
             Otherwise, players score based on the number of centres they own at \
             the end of the game:\n\
             14-17 centres: 105 points\n\
             11-13 centres: 70 points\n\
             8-10 centres: 42 points\n\
             4-7 centres: 30 points\n\
             1-3 centres: 21 points\n\
             0 centres: 0 points",
            self.soloer_pts
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, self.soloer_pts, 0.0));
        }
        Ok(Scores::from_fn(|p| band_points(state.dot_count(p))))
    }
}
