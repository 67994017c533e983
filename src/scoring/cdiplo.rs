//! C-Diplo scoring and its Namur variant.

use crate::state::{GameState, StateError};

use super::{ranked_by_dots, share_rank_points, solo_scores, Scores, ScoringSystem};

/// C-Diplo: participation points, one per centre and shared points for
/// the top three places.
#[derive(Debug, Clone)]
pub struct CDiplo {
    name: String,
    soloer_pts: f64,
    played_pts: f64,
    position_pts: [f64; 3],
    loss_pts: f64,
}

impl CDiplo {
    pub fn new(
        name: impl Into<String>,
        soloer_pts: f64,
        played_pts: f64,
        position_pts: [f64; 3],
        loss_pts: f64,
    ) -> Self {
        CDiplo {
            name: name.into(),
            soloer_pts,
            played_pts,
            position_pts,
            loss_pts,
        }
    }

    /// 100 for a solo, 1 for playing, 38/14/7 for the top three.
    pub fn cdiplo_100() -> Self {
        CDiplo::new("CDiplo 100", 100.0, 1.0, [38.0, 14.0, 7.0], 0.0)
    }

    /// 80 for a solo, nothing for playing, 25/14/7 for the top three.
    pub fn cdiplo_80() -> Self {
        CDiplo::new("CDiplo 80", 80.0, 0.0, [25.0, 14.0, 7.0], 0.0)
    }
}

impl ScoringSystem for CDiplo {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "If there is a solo:\n\
             - Soloers score {}.\n\
             - Losers to a solo score {}.\n\
             Otherwise:\n\
             - Participants get {}.\n\
             - Everyone gets one point per centre owned.\n\
             - Power with the most centres gets {}.\n\
             - Power with the second most centres gets {}.\n\
             - Power with the third most centres gets {}.\n\
             - If powers are tied for rank, they split the points for their ranks.",
            self.soloer_pts,
            self.loss_pts,
            self.played_pts,
            self.position_pts[0],
            self.position_pts[1],
            self.position_pts[2],
        )
    }

    // A dead power keeps its participation points unless someone soloes.
    fn dead_score_can_change(&self) -> bool {
        self.loss_pts != self.played_pts
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, self.soloer_pts, self.loss_pts));
        }
        let ranked = ranked_by_dots(state);
        let rank_pts = share_rank_points(&ranked, &self.position_pts);
        let mut scores = Scores::zero();
        for ((power, dots), rank) in ranked.iter().zip(rank_pts) {
            scores.set(*power, self.played_pts + f64::from(*dots) + rank);
        }
        Ok(scores)
    }
}

/// Points for owning 0 to 6 centres. Each further centre adds one.
const NAMUR_CENTRE_PTS: [f64; 7] = [0.0, 5.0, 9.0, 12.0, 14.0, 16.0, 18.0];

fn namur_centre_points(dots: u32) -> f64 {
    match NAMUR_CENTRE_PTS.get(dots as usize) {
        Some(&pts) => pts,
        None => NAMUR_CENTRE_PTS[6] + f64::from(dots - 6),
    }
}

/// C-Diplo as played in Namur: early centres are worth more than later
/// ones.
#[derive(Debug, Clone, Default)]
pub struct CDiploNamur;

impl CDiploNamur {
    const SOLO_PTS: f64 = 85.0;
    const POSITION_PTS: [f64; 3] = [38.0, 14.0, 7.0];
}

impl ScoringSystem for CDiploNamur {
    fn name(&self) -> &str {
        "C-Diplo Namur"
    }

    fn description(&self) -> String {
        format!(
            "If there is a solo:\n\
             - Soloers score {}.\n\
             - Everyone else scores zero.\n\
             Otherwise:\n\
             - Participants get one point.\n\
             - Everyone who owns centres gets points for them: \
             1 SC = 5, 2 SCs = 9, 3 SCs = 12, 4 SCs = 14, 5 SCs = 16, 6 SCs = 18, \
             then 1 per additional SC.\n\
             - Power with the most centres gets {}.\n\
             - Power in second place gets {}.\n\
             - Power in third place gets {}.\n\
             - If powers are tied for rank, they split the points for their ranks.",
            Self::SOLO_PTS,
            Self::POSITION_PTS[0],
            Self::POSITION_PTS[1],
            Self::POSITION_PTS[2],
        )
    }

    // Losers to a solo lose their participation point.
    fn dead_score_can_change(&self) -> bool {
        true
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, Self::SOLO_PTS, 0.0));
        }
        let ranked = ranked_by_dots(state);
        let rank_pts = share_rank_points(&ranked, &Self::POSITION_PTS);
        let mut scores = Scores::zero();
        for ((power, dots), rank) in ranked.iter().zip(rank_pts) {
            scores.set(*power, 1.0 + namur_centre_points(*dots) + rank);
        }
        Ok(scores)
    }
}
