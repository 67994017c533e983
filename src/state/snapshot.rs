//! Final-state-only game description.
//!
//! Holds the centre counts at the end of the game, the year each dead power
//! was eliminated and any passed draw. This is enough for every scoring
//! system except history-based tie-breaks, which fall back to treating the
//! tied powers as equal.

use crate::board::{Power, ALL_POWERS, FIRST_YEAR, POWER_COUNT};

use super::{check_draw, check_total, Draw, GameState, StateError};

/// Minimal description of a single game, for scoring purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotState {
    counts: [u32; POWER_COUNT],
    eliminations: [Option<u16>; POWER_COUNT],
    final_year: u16,
    draw: Option<Draw>,
}

impl SnapshotState {
    /// Builds a validated snapshot.
    ///
    /// `counts` and `eliminations` are indexed by `Power as usize`. Every
    /// power with no centres needs an elimination year; powers with
    /// centres must not have one.
    pub fn new(
        counts: [u32; POWER_COUNT],
        final_year: u16,
        eliminations: [Option<u16>; POWER_COUNT],
        draw: Option<Draw>,
    ) -> Result<Self, StateError> {
        check_total(final_year, &counts)?;
        for power in ALL_POWERS {
            let dots = counts[power.index()];
            match eliminations[power.index()] {
                Some(year) if year < FIRST_YEAR => {
                    return Err(StateError::EliminatedBeforeStart { power, year });
                }
                Some(year) if year > final_year => {
                    return Err(StateError::EliminatedAfterEnd { power, year, final_year });
                }
                Some(year) if dots > 0 => {
                    return Err(StateError::EliminatedWithCentres { power, year, dots });
                }
                None if dots == 0 => return Err(StateError::MissingEliminationYear(power)),
                _ => {}
            }
        }
        if let Some(draw) = &draw {
            check_draw(draw, &counts, final_year)?;
        }
        Ok(SnapshotState {
            counts,
            eliminations,
            final_year,
            draw,
        })
    }
}

impl GameState for SnapshotState {
    fn dot_count(&self, power: Power) -> u32 {
        self.counts[power.index()]
    }

    fn dot_count_in(&self, power: Power, year: u16) -> Result<u32, StateError> {
        if year < FIRST_YEAR - 1 || year > self.final_year {
            return Err(StateError::InvalidYear(year));
        }
        if year != self.final_year {
            return Err(StateError::DotCountUnknown { power, year });
        }
        Ok(self.counts[power.index()])
    }

    fn final_year(&self) -> u16 {
        self.final_year
    }

    fn year_eliminated(&self, power: Power) -> Option<u16> {
        self.eliminations[power.index()]
    }

    fn draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Power::*;

    fn three_survivors() -> SnapshotState {
        SnapshotState::new(
            [0, 17, 0, 0, 16, 1, 0],
            1907,
            [Some(1903), None, Some(1907), Some(1905), None, None, Some(1905)],
            None,
        )
        .unwrap()
    }

    #[test]
    fn queries_final_state() {
        let state = three_survivors();
        assert_eq!(state.dot_count(England), 17);
        assert_eq!(state.final_year(), 1907);
        assert_eq!(state.survivors(), vec![England, Italy, Russia]);
        assert_eq!(state.highest_dot_count(), 17);
        assert_eq!(state.num_powers_with(0), 4);
        assert_eq!(state.year_eliminated(Austria), Some(1903));
        assert_eq!(state.year_eliminated(England), None);
        assert_eq!(state.powers_in_draw(), state.survivors());
        assert!(!state.is_solo());
        assert_eq!(state.soloer(), None);
        assert_eq!(state.solo_year(), None);
    }

    #[test]
    fn board_solo() {
        let state = SnapshotState::new(
            [0, 4, 0, 18, 0, 5, 7],
            1907,
            [Some(1904), None, Some(1906), None, Some(1906), None, None],
            None,
        )
        .unwrap();
        assert!(state.is_solo());
        assert_eq!(state.soloer(), Some(Germany));
        assert_eq!(state.solo_year(), Some(1907));
    }

    #[test]
    fn concession_is_solo_but_not_board_solo() {
        let state = SnapshotState::new(
            [1, 10, 1, 1, 10, 10, 1],
            1907,
            [None; POWER_COUNT],
            Some(Draw::new([Italy], 1907).unwrap()),
        )
        .unwrap();
        assert!(!state.is_solo());
        assert_eq!(state.soloer(), Some(Italy));
        assert_eq!(state.solo_year(), Some(1907));
        assert_eq!(state.powers_in_draw(), vec![Italy]);
    }

    #[test]
    fn final_year_only_history() {
        let state = three_survivors();
        assert_eq!(state.dot_count_in(Italy, 1907), Ok(16));
        assert_eq!(
            state.dot_count_in(Italy, 1906),
            Err(StateError::DotCountUnknown { power: Italy, year: 1906 })
        );
        assert_eq!(state.dot_count_in(Italy, 1899), Err(StateError::InvalidYear(1899)));
        assert_eq!(state.dot_count_in(Italy, 1908), Err(StateError::InvalidYear(1908)));
    }

    #[test]
    fn rejects_too_many_centres() {
        let err = SnapshotState::new([10, 10, 10, 5, 0, 0, 0], 1905, [None, None, None, None, Some(1903), Some(1903), Some(1903)], None);
        assert_eq!(err, Err(StateError::TooManyCentres { year: 1905, total: 35 }));
    }

    #[test]
    fn rejects_bad_elimination_years() {
        let mut elims = [None; POWER_COUNT];
        elims[0] = Some(1900);
        let err = SnapshotState::new([0, 6, 6, 6, 6, 5, 5], 1905, elims, None);
        assert_eq!(err, Err(StateError::EliminatedBeforeStart { power: Austria, year: 1900 }));

        elims[0] = Some(1906);
        let err = SnapshotState::new([0, 6, 6, 6, 6, 5, 5], 1905, elims, None);
        assert_eq!(
            err,
            Err(StateError::EliminatedAfterEnd { power: Austria, year: 1906, final_year: 1905 })
        );

        elims[0] = Some(1904);
        let err = SnapshotState::new([1, 6, 6, 6, 6, 5, 4], 1905, elims, None);
        assert_eq!(
            err,
            Err(StateError::EliminatedWithCentres { power: Austria, year: 1904, dots: 1 })
        );

        let err = SnapshotState::new([0, 6, 6, 6, 6, 5, 5], 1905, [None; POWER_COUNT], None);
        assert_eq!(err, Err(StateError::MissingEliminationYear(Austria)));
    }

    #[test]
    fn rejects_dead_power_in_draw() {
        let draw = Draw::new([Austria, England], 1905).unwrap();
        let mut elims = [None; POWER_COUNT];
        elims[0] = Some(1904);
        let err = SnapshotState::new([0, 6, 6, 6, 6, 5, 5], 1905, elims, Some(draw));
        assert_eq!(err, Err(StateError::DrawIncludesEliminated(Austria)));
    }

    #[test]
    fn rejects_draw_outside_game() {
        let counts = [1, 10, 1, 1, 10, 10, 1];
        let late = Draw::new([Germany], 1990).unwrap();
        assert_eq!(
            SnapshotState::new(counts, 1907, [None; POWER_COUNT], Some(late)),
            Err(StateError::DrawYearOutOfRange { year: 1990, final_year: 1907 })
        );
        let early = Draw::new([Germany], 1850).unwrap();
        assert_eq!(
            SnapshotState::new(counts, 1907, [None; POWER_COUNT], Some(early)),
            Err(StateError::DrawYearOutOfRange { year: 1850, final_year: 1907 })
        );
    }
}
