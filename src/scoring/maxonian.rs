//! Maxonian and 7Eleven scoring.
//!
//! Places are decided by centre count, with ties broken by going back
//! through the game to the most recent year the tied powers differed.

use crate::board::{Power, ALL_POWERS, FIRST_YEAR, WINNING_SCS};
use crate::state::{GameState, StateError};

use super::{Scores, ScoringSystem};

const POSITION_PTS: [f64; 7] = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

/// 7 points for first place down to 1 for last, plus a point per centre
/// over the bonus threshold.
#[derive(Debug, Clone)]
pub struct Maxonian {
    name: String,
    bonus_threshold: u32,
}

impl Maxonian {
    pub fn new(name: impl Into<String>, bonus_threshold: u32) -> Self {
        Maxonian {
            name: name.into(),
            bonus_threshold,
        }
    }

    pub fn maxonian() -> Self {
        Maxonian::new("Maxonian", 13)
    }

    pub fn seven_eleven() -> Self {
        Maxonian::new("7Eleven", 11)
    }
}

/// Awards `points` (best first) to `powers` by their centres in `year`.
///
/// Powers tied in `year` are placed by the closest earlier year with known
/// counts. Years the state has no counts for are skipped. Powers never
/// separated share their points equally.
fn place_powers(
    state: &dyn GameState,
    year: u16,
    powers: &[Power],
    points: &[f64],
    scores: &mut Scores,
) -> Result<(), StateError> {
    if year < FIRST_YEAR {
        let share = points.iter().sum::<f64>() / powers.len() as f64;
        for &p in powers {
            scores.set(p, share);
        }
        return Ok(());
    }

    let mut dots = Vec::with_capacity(powers.len());
    for &p in powers {
        dots.push((p, state.dot_count_in(p, year)?));
    }
    dots.sort_by(|a, b| b.1.cmp(&a.1));

    let mut start = 0;
    while start < dots.len() {
        let count = dots[start].1;
        let tied: Vec<Power> = dots[start..]
            .iter()
            .take_while(|(_, d)| *d == count)
            .map(|(p, _)| *p)
            .collect();
        if let [power] = tied.as_slice() {
            scores.set(*power, points[start]);
        } else {
            let sub_points = &points[start..start + tied.len()];
            let mut earlier = year - 1;
            loop {
                match place_powers(state, earlier, &tied, sub_points, scores) {
                    Ok(()) => break,
                    Err(StateError::DotCountUnknown { .. }) => earlier -= 1,
                    Err(e) => return Err(e),
                }
            }
        }
        start += tied.len();
    }
    Ok(())
}

impl ScoringSystem for Maxonian {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!(
            "Players are ranked by supply centre count.\n\
             Top-ranked player gets 7 points, second gets 6, third gets 5, \
             fourth gets 4, fifth gets 3, sixth gets 2, and last gets 1.\n\
             If two players are tied, their SC counts in previous years are compared, \
             and the player who most recently was ahead gets the higher score.\n\
             If two players had the same supply centre count every year, \
             they each score the average of their place and the place below.\n\
             Any player with more than {} supply centres scores 1 additional point per SC \
             above that threshold, unless the game was soloed, in which case only the \
             soloer gets these points.",
            self.bonus_threshold
        )
    }

    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError> {
        let mut scores = Scores::zero();
        place_powers(state, state.final_year(), &ALL_POWERS, &POSITION_PTS, &mut scores)?;

        let soloer = state.soloer();
        for p in ALL_POWERS {
            // A soloer scores as if they had exactly 18 centres
            let dots = state.dot_count(p).min(WINNING_SCS);
            if dots > self.bonus_threshold && soloer.map_or(true, |s| s == p) {
                scores.add(p, f64::from(dots - self.bonus_threshold));
            }
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Power::*;
    use crate::scoring::testutil::*;
    use crate::state::ChartState;
    use std::collections::BTreeMap;

    /// Germany grows to a solo in 1907; 1903 was never recorded.
    fn chart(up_to: u16) -> ChartState {
        let mut years = BTreeMap::new();
        years.insert(1901, [5, 4, 5, 5, 4, 5, 4]);
        years.insert(1902, [4, 4, 4, 6, 4, 6, 6]);
        years.insert(1904, [0, 5, 4, 8, 4, 5, 8]);
        years.insert(1905, [0, 5, 3, 13, 3, 4, 6]);
        years.insert(1906, [0, 2, 0, 17, 0, 1, 14]);
        years.insert(1907, [0, 1, 0, 18, 0, 1, 14]);
        years.retain(|&y, _| y <= up_to);
        ChartState::new(years, None).unwrap()
    }

    #[test]
    fn ties_broken_by_history_skipping_unknown_years() {
        let scores = Maxonian::maxonian().scores(&chart(1904)).unwrap();
        assert_scores(&scores, [1.0, 4.0, 3.0, 7.0, 2.0, 5.0, 6.0]);
    }

    #[test]
    fn ties_broken_further_back() {
        let scores = Maxonian::maxonian().scores(&chart(1905)).unwrap();
        assert_scores(&scores, [1.0, 5.0, 3.0, 7.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn threshold_bonus() {
        let scores = Maxonian::maxonian().scores(&chart(1906)).unwrap();
        assert_scores(&scores, [1.0, 5.0, 3.0, 11.0, 2.0, 4.0, 7.0]);
        let scores = Maxonian::seven_eleven().scores(&chart(1906)).unwrap();
        assert_scores(&scores, [1.0, 5.0, 3.0, 13.0, 2.0, 4.0, 9.0]);
    }

    #[test]
    fn only_soloer_gets_bonus() {
        let scores = Maxonian::maxonian().scores(&chart(1907)).unwrap();
        assert_scores(&scores, [1.0, 5.0, 3.0, 12.0, 2.0, 4.0, 6.0]);
        let scores = Maxonian::seven_eleven().scores(&chart(1907)).unwrap();
        assert_scores(&scores, [1.0, 5.0, 3.0, 14.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn snapshot_ties_share_places() {
        let scores = Maxonian::maxonian().scores(&opening()).unwrap();
        let top = (7.0 + 6.0 + 5.0 + 4.0) / 4.0;
        assert_scores(&scores, [top, 2.0, top, top, 2.0, top, 2.0]);
        assert_eq!(scores[England], scores[Turkey]);
    }
}
