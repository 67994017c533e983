//! Full supply-centre chart game state.
//!
//! Stores the centre count of every power at the end of each recorded year,
//! so scoring systems can look back through the game (elimination order,
//! history-based tie-breaks). Elimination years are derived once, at
//! construction, from the chart itself.

use std::collections::BTreeMap;

use crate::board::{Power, ALL_POWERS, FIRST_YEAR, POWER_COUNT};

use super::{check_draw, check_total, Draw, GameState, StateError};

/// Year-by-year state of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartState {
    years: BTreeMap<u16, [u32; POWER_COUNT]>,
    final_year: u16,
    final_counts: [u32; POWER_COUNT],
    eliminations: [Option<u16>; POWER_COUNT],
    draw: Option<Draw>,
}

impl ChartState {
    /// Builds a validated chart from complete per-year counts.
    ///
    /// Years need not be contiguous. `FIRST_YEAR - 1` may be included as
    /// the starting position.
    pub fn new(
        years: BTreeMap<u16, [u32; POWER_COUNT]>,
        draw: Option<Draw>,
    ) -> Result<Self, StateError> {
        let (&final_year, &final_counts) =
            years.last_key_value().ok_or(StateError::EmptyChart)?;
        let first_year = years.keys().next().copied().unwrap_or(final_year);
        if first_year < FIRST_YEAR - 1 {
            return Err(StateError::InvalidYear(first_year));
        }

        let mut eliminations = [None; POWER_COUNT];
        for (&year, counts) in &years {
            check_total(year, counts)?;
            for power in ALL_POWERS {
                let dots = counts[power.index()];
                match eliminations[power.index()] {
                    None if dots == 0 => eliminations[power.index()] = Some(year),
                    Some(_) if dots > 0 => return Err(StateError::Revived { power, year }),
                    _ => {}
                }
            }
        }

        if let Some(draw) = &draw {
            check_draw(draw, &final_counts, final_year)?;
        }

        Ok(ChartState {
            years,
            final_year,
            final_counts,
            eliminations,
            draw,
        })
    }

    /// Returns a chart of this game as it stood at the end of `year`.
    ///
    /// Years after `year` are dropped and the draw is kept only if it
    /// passed by then. Used to rescore a game at an earlier point.
    pub fn truncated(&self, year: u16) -> Result<Self, StateError> {
        if year > self.final_year {
            return Err(StateError::InvalidYear(year));
        }
        let years: BTreeMap<u16, [u32; POWER_COUNT]> = self
            .years
            .range(..=year)
            .map(|(&y, &c)| (y, c))
            .collect();
        let draw = self.draw.clone().filter(|d| d.year() <= year);
        ChartState::new(years, draw)
    }
}

impl GameState for ChartState {
    fn dot_count(&self, power: Power) -> u32 {
        self.final_counts[power.index()]
    }

    fn dot_count_in(&self, power: Power, year: u16) -> Result<u32, StateError> {
        if year < FIRST_YEAR - 1 || year > self.final_year {
            return Err(StateError::InvalidYear(year));
        }
        self.years
            .get(&year)
            .map(|counts| counts[power.index()])
            .ok_or(StateError::DotCountUnknown { power, year })
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
