//! Read-only views of a game's results for scoring.
//!
//! [`GameState`] is the only input a scoring system sees. Two backings are
//! provided: [`SnapshotState`] knows just the end of the game, while
//! [`ChartState`] holds the full year-by-year supply-centre chart and can
//! answer questions about earlier years.

pub mod chart;
pub mod input;
pub mod snapshot;

use crate::board::{Power, ALL_POWERS, FIRST_YEAR, POWER_COUNT, SUPPLY_CENTER_COUNT, WINNING_SCS};

pub use chart::ChartState;
pub use input::{parse_game, DrawInput, GameInput, InputError};
pub use snapshot::SnapshotState;

/// Errors raised while building or querying a game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("year {0} is outside the game")]
    InvalidYear(u16),

    #[error("centre count for {power} in {year} is unknown")]
    DotCountUnknown { power: Power, year: u16 },

    #[error("total supply centre count in {year} is {total}, more than {max}", max = SUPPLY_CENTER_COUNT)]
    TooManyCentres { year: u16, total: u32 },

    #[error("{power} cannot be eliminated in {year}, before the game started")]
    EliminatedBeforeStart { power: Power, year: u16 },

    #[error("{power} cannot be eliminated in {year} if the game ended in {final_year}")]
    EliminatedAfterEnd { power: Power, year: u16, final_year: u16 },

    #[error("{power} cannot be eliminated in {year} and now have {dots} centres")]
    EliminatedWithCentres { power: Power, year: u16, dots: u32 },

    #[error("{0} has no centres but no elimination year")]
    MissingEliminationYear(Power),

    #[error("{0} was eliminated and cannot be part of a draw")]
    DrawIncludesEliminated(Power),

    #[error("a draw must include at least one power")]
    EmptyDraw,

    #[error("a draw cannot pass in {year} if the game ran from {first} to {final_year}", first = FIRST_YEAR)]
    DrawYearOutOfRange { year: u16, final_year: u16 },

    #[error("{0:?} is not a year")]
    BadYear(String),

    #[error("no centre count for {power} in {year}")]
    MissingPower { power: Power, year: u16 },

    #[error("{power} has centres again in {year} after being eliminated")]
    Revived { power: Power, year: u16 },

    #[error("the supply centre chart is empty")]
    EmptyChart,
}

/// A passed draw vote, or a concession when it names a single power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    powers: Vec<Power>,
    year: u16,
}

impl Draw {
    /// Creates a draw among `powers`, passed in `year`.
    ///
    /// Powers are kept in canonical order with duplicates removed.
    pub fn new(powers: impl IntoIterator<Item = Power>, year: u16) -> Result<Self, StateError> {
        let mut powers: Vec<Power> = powers.into_iter().collect();
        powers.sort();
        powers.dedup();
        if powers.is_empty() {
            return Err(StateError::EmptyDraw);
        }
        Ok(Draw { powers, year })
    }

    /// The powers sharing the draw.
    pub fn powers(&self) -> &[Power] {
        &self.powers
    }

    pub fn draw_size(&self) -> usize {
        self.powers.len()
    }

    pub fn contains(&self, power: Power) -> bool {
        self.powers.contains(&power)
    }

    /// The year the vote passed.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// True for a one-power draw, which ends the game like a solo.
    pub fn is_concession(&self) -> bool {
        self.powers.len() == 1
    }
}

/// The state of a game to be scored.
///
/// Implementations are immutable after construction, so one state can be
/// scored by many systems, from many threads, at once.
pub trait GameState {
    /// Supply centres owned by `power` at the end of the final year.
    fn dot_count(&self, power: Power) -> u32;

    /// Supply centres owned by `power` at the end of `year`.
    ///
    /// `FIRST_YEAR - 1` is the starting position. Years outside the game
    /// are `InvalidYear`; years with no recorded counts are `DotCountUnknown`.
    fn dot_count_in(&self, power: Power, year: u16) -> Result<u32, StateError>;

    /// The last year for which supply-centre ownership is known.
    fn final_year(&self) -> u16;

    /// The first year `power` owned no centres, if it ever did.
    fn year_eliminated(&self, power: Power) -> Option<u16>;

    /// The passed draw or concession, if any.
    fn draw(&self) -> Option<&Draw>;

    /// Powers still owning at least one centre.
    fn survivors(&self) -> Vec<Power> {
        ALL_POWERS
            .into_iter()
            .filter(|&p| self.dot_count(p) > 0)
            .collect()
    }

    /// Centres owned by the strongest power(s).
    fn highest_dot_count(&self) -> u32 {
        ALL_POWERS
            .into_iter()
            .map(|p| self.dot_count(p))
            .max()
            .unwrap_or(0)
    }

    /// How many powers own exactly `centres` centres.
    fn num_powers_with(&self, centres: u32) -> usize {
        ALL_POWERS
            .into_iter()
            .filter(|&p| self.dot_count(p) == centres)
            .count()
    }

    /// True if some power owns enough centres to win outright.
    fn is_solo(&self) -> bool {
        self.highest_dot_count() >= WINNING_SCS
    }

    /// The power that soloed, or that the game was conceded to.
    fn soloer(&self) -> Option<Power> {
        if let Some(p) = ALL_POWERS
            .into_iter()
            .find(|&p| self.dot_count(p) >= WINNING_SCS)
        {
            return Some(p);
        }
        match self.draw() {
            Some(draw) if draw.is_concession() => Some(draw.powers()[0]),
            _ => None,
        }
    }

    /// The year the game was won or conceded.
    fn solo_year(&self) -> Option<u16> {
        if self.is_solo() {
            return Some(self.final_year());
        }
        match self.draw() {
            Some(draw) if draw.is_concession() => Some(draw.year()),
            _ => None,
        }
    }

    /// Powers sharing the draw; the survivors if no draw passed.
    fn powers_in_draw(&self) -> Vec<Power> {
        match self.draw() {
            Some(draw) => draw.powers().to_vec(),
            None => self.survivors(),
        }
    }

    /// Elimination year of a power known to be dead.
    ///
    /// A dead power without one means the state is malformed.
    fn elimination_year_of(&self, power: Power) -> Result<u16, StateError> {
        self.year_eliminated(power)
            .ok_or(StateError::MissingEliminationYear(power))
    }
}

impl<G: GameState + ?Sized> GameState for Box<G> {
    fn dot_count(&self, power: Power) -> u32 {
        (**self).dot_count(power)
    }

    fn dot_count_in(&self, power: Power, year: u16) -> Result<u32, StateError> {
        (**self).dot_count_in(power, year)
    }

    fn final_year(&self) -> u16 {
        (**self).final_year()
    }

    fn year_eliminated(&self, power: Power) -> Option<u16> {
        (**self).year_eliminated(power)
    }

    fn draw(&self) -> Option<&Draw> {
        (**self).draw()
    }
}

/// Rejects a year whose counts exceed the board.
pub(crate) fn check_total(year: u16, counts: &[u32]) -> Result<(), StateError> {
    let total: u32 = counts.iter().sum();
    if total > SUPPLY_CENTER_COUNT {
        return Err(StateError::TooManyCentres { year, total });
    }
    Ok(())
}

/// Rejects a draw that includes a dead power or passed outside the game.
pub(crate) fn check_draw(
    draw: &Draw,
    final_counts: &[u32; POWER_COUNT],
    final_year: u16,
) -> Result<(), StateError> {
    if draw.year() < FIRST_YEAR || draw.year() > final_year {
        return Err(StateError::DrawYearOutOfRange {
            year: draw.year(),
            final_year,
        });
    }
    if let Some(&dead) = draw.powers().iter().find(|p| final_counts[p.index()] == 0) {
        return Err(StateError::DrawIncludesEliminated(dead));
    }
    Ok(())
}
