//! Carnage scoring, in its dead-equal, elimination-order, centre-count and
//! lead-bonus forms.

use crate::board::{Power, SUPPLY_CENTER_COUNT};
use crate::state::{GameState, StateError};

use super::{ranked_by_dots, share_rank_points, solo_scores, Scores, ScoringSystem};

const POSITION_PTS: [f64; 7] = [7000.0, 6000.0, 5000.0, 4000.0, 3000.0, 2000.0, 1000.0];
const CENTRE_COUNT_POSITION_PTS: [f64; 7] =
    [7007.0, 6006.0, 5005.0, 4004.0, 3003.0, 2002.0, 1001.0];

/// Position points for every place, plus points per centre.
///
/// Dead powers either all share the bottom places, or are ranked below
/// every survivor by when they were eliminated.
#[derive(Debug, Clone)]
pub struct Carnage {
    name: String,
    points_per_dot: f64,
    position_pts: [f64; 7],
    solo_pts: f64,
    loss_pts: f64,
    dead_equal: bool,
    pts_per_dot_lead: f64,
}

impl Carnage {
    fn standard(name: &str, dead_equal: bool, pts_per_dot_lead: f64) -> Self {
        Carnage {
            name: name.to_string(),
            points_per_dot: 1.0,
            position_pts: POSITION_PTS,
            solo_pts: POSITION_PTS.iter().sum::<f64>() + f64::from(SUPPLY_CENTER_COUNT),
            loss_pts: 0.0,
            dead_equal,
            pts_per_dot_lead,
        }
    }

    /// Eliminated powers all split the remaining position points.
    pub fn dead_equal() -> Self {
        Carnage::standard("Carnage with dead equal", true, 0.0)
    }

    /// Eliminated powers are placed by elimination year.
    pub fn elimination_order() -> Self {
        Carnage::standard("Carnage with elimination order", false, 0.0)
    }

    /// Centres dominate position, and losers to a solo still score.
    pub fn centre_count() -> Self {
        Carnage {
            name: "Center-count Carnage".to_string(),
            points_per_dot: 500.0,
            position_pts: CENTRE_COUNT_POSITION_PTS,
            solo_pts: 39028.0,
            loss_pts: 1000.0,
            dead_equal: false,
            pts_per_dot_lead: 0.0,
        }
    }

    /// Elimination order, with a bonus for the leader's margin.
    pub fn carnage_2023() -> Self {
        Carnage::standard("Carnage 2023", false, 300.0)
    }

    fn dead_equal_scores(&self, ranked: &[(Power, u32)]) -> Scores {
        let rank_pts = share_rank_points(ranked, &self.position_pts);
        let mut scores = Scores::zero();
        for ((power, dots), rank) in ranked.iter().zip(rank_pts) {
            scores.set(*power, self.points_per_dot * f64::from(*dots) + rank);
        }
        scores
    }

    fn elimination_order_scores(
        &self,
        state: &dyn GameState,
        ranked: &[(Power, u32)],
    ) -> Result<Scores, StateError> {
        let mut scores = Scores::zero();
        let (live, dead): (Vec<(Power, u32)>, Vec<(Power, u32)>) =
            ranked.iter().partition(|(_, dots)| *dots > 0);
        let (live_pts, dead_pts) = self.position_pts.split_at(live.len());

        let rank_pts = share_rank_points(&live, live_pts);
        for ((power, dots), rank) in live.iter().zip(rank_pts) {
            scores.set(*power, self.points_per_dot * f64::from(*dots) + rank);
        }
        if let [(leader, first), (_, second), ..] = live.as_slice() {
            let lead = first - second;
            scores.add(*leader, f64::from(lead) * self.pts_per_dot_lead);
        }

        // Later elimination ranks higher
        let mut eliminated = Vec::with_capacity(dead.len());
        for (power, _) in &dead {
            eliminated.push((*power, state.elimination_year_of(*power)?));
        }
        eliminated.sort_by(|a, b| b.1.cmp(&a.1));
        let rank_pts = share_rank_points(&eliminated, dead_pts);
        for ((power, _), rank) in eliminated.iter().zip(rank_pts) {
            scores.set(*power, rank);
        }
        Ok(scores)
    }
}

impl ScoringSystem for Carnage {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let pos = self
            .position_pts
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let lead = if self.pts_per_dot_lead != 0.0 {
            format!(
                " Leader gets an additional {} points per centre ahead of second place power.",
                self.pts_per_dot_lead
            )
        } else {
            String::new()
        };
        let dead = if self.dead_equal {
            "Eliminated powers all split position points."
        } else {
            "Eliminated powers get position points based on when they were eliminated."
        };
        format!(
            "If any power soloed, they get {} points and all others get {}.\n\
             Otherwise, all powers score {} point per centre owned at the end plus \
             points for their final position.{}\n\
             Position points are {}, with ties splitting those points.\n{}",
            self.solo_pts, self.loss_pts, self.points_per_dot, lead, pos, dead
        )
    }

    fn dead_score_can_change(&self) -> bool {
        true
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        if let Some(soloer) = state.soloer() {
            return Ok(solo_scores(soloer, self.solo_pts, self.loss_pts));
        }
        let ranked = ranked_by_dots(state);
        if self.dead_equal {
            Ok(self.dead_equal_scores(&ranked))
        } else {
            self.elimination_order_scores(state, &ranked)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::testutil::*;

    #[test]
    fn dead_equal_share_bottom_places() {
        let scores = Carnage::dead_equal().scores(&three_dead()).unwrap();
        assert_scores(&scores, [2000.0, 4505.0, 2000.0, 7017.0, 2000.0, 4505.0, 6007.0]);
        assert_total(&scores, 28034.0);
    }

    #[test]
    fn one_dead_power_takes_last_place() {
        let state = snapshot(
            [0, 5, 4, 8, 3, 6, 7],
            1904,
            [Some(1904), None, None, None, None, None, None],
        );
        let scores = Carnage::dead_equal().scores(&state).unwrap();
        assert_eq!(scores[crate::board::Power::Austria], 1000.0);
        // one neutral centre
        assert_total(&scores, 28033.0);
    }

    #[test]
    fn elimination_order_ranks_dead_by_year() {
        let scores = Carnage::elimination_order().scores(&three_dead()).unwrap();
        assert_scores(&scores, [1000.0, 4505.0, 2500.0, 7017.0, 2500.0, 4505.0, 6007.0]);
        assert_total(&scores, 28034.0);
    }

    #[test]
    fn centre_count_variant() {
        let scores = Carnage::centre_count().scores(&three_dead()).unwrap();
        assert_scores(&scores, [1001.0, 7004.5, 2502.5, 15507.0, 2502.5, 7004.5, 9506.0]);
    }

    #[test]
    fn lead_bonus() {
        let scores = Carnage::carnage_2023().scores(&three_dead()).unwrap();
        assert_scores(&scores, [1000.0, 4505.0, 2500.0, 10017.0, 2500.0, 4505.0, 6007.0]);
    }

    #[test]
    fn no_lead_bonus_when_tied() {
        let scores = Carnage::carnage_2023().scores(&opening()).unwrap();
        let plain = Carnage::elimination_order().scores(&opening()).unwrap();
        assert_eq!(scores, plain);
    }

    #[test]
    fn solos() {
        let scores = Carnage::elimination_order().scores(&german_solo()).unwrap();
        assert_scores(&scores, [0.0, 0.0, 0.0, 28034.0, 0.0, 0.0, 0.0]);
        let scores = Carnage::centre_count().scores(&german_solo()).unwrap();
        assert_scores(&scores, [1000.0, 1000.0, 1000.0, 39028.0, 1000.0, 1000.0, 1000.0]);
    }
}
