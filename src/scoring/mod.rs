//! Game scoring systems.
//!
//! Each scoring system turns one [`GameState`] into a score for every
//! power. Systems are configured once with immutable constants and share
//! nothing between calls, so a single instance can score any number of
//! games concurrently.

pub mod bangkok;
pub mod base3;
pub mod carnage;
pub mod cdiplo;
pub mod detour09;
pub mod draw_size;
pub mod haight;
pub mod janus;
pub mod manorcon;
pub mod maxonian;
pub mod omg;
pub mod rank;
pub mod ranked_classic;
pub mod solos;
pub mod southern_sun;
pub mod sum_of_squares;
pub mod tribute;
pub mod vulcan;
pub mod whipping;
pub mod world_classic;
pub mod your_draw_size;

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::board::{Power, ALL_POWERS, POWER_COUNT};
use crate::state::{GameState, StateError};

pub use bangkok::{Bangkok, BangkokPike};
pub use base3::Base3;
pub use carnage::Carnage;
pub use cdiplo::{CDiplo, CDiploNamur};
pub use detour09::Detour09;
pub use draw_size::DrawSize;
pub use haight::Haight;
pub use janus::Janus;
pub use manorcon::ManorCon;
pub use maxonian::Maxonian;
pub use omg::OpenMindTheGap;
pub use rank::{lowest_rank_points, lowest_rank_points_two_way, share_rank_points};
pub use ranked_classic::RankedClassic;
pub use solos::SoloOrBust;
pub use southern_sun::SouthernSun;
pub use sum_of_squares::SumOfSquares;
pub use tribute::{OpenTribute, Tribute};
pub use vulcan::Vulcan;
pub use whipping::Whipping;
pub use world_classic::WorldClassic;
pub use your_draw_size::YourDrawSize;

/// The score of every power in one game.
///
/// Always holds exactly one value per power; iteration follows the
/// canonical power order whatever ranking produced the values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scores([f64; POWER_COUNT]);

impl Scores {
    /// All powers on zero.
    pub fn zero() -> Self {
        Scores([0.0; POWER_COUNT])
    }

    /// Builds scores by evaluating `f` for each power.
    pub fn from_fn(mut f: impl FnMut(Power) -> f64) -> Self {
        let mut values = [0.0; POWER_COUNT];
        for p in ALL_POWERS {
            values[p.index()] = f(p);
        }
        Scores(values)
    }

    pub fn get(&self, power: Power) -> f64 {
        self.0[power.index()]
    }

    pub fn set(&mut self, power: Power, score: f64) {
        self.0[power.index()] = score;
    }

    pub fn add(&mut self, power: Power, points: f64) {
        self.0[power.index()] += points;
    }

    /// `(power, score)` pairs in canonical power order.
    pub fn iter(&self) -> impl Iterator<Item = (Power, f64)> + '_ {
        ALL_POWERS.into_iter().map(move |p| (p, self.0[p.index()]))
    }

    /// Sum of all powers' scores.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Rescales every score so they sum to `total`, keeping their ratios.
    ///
    /// All-zero scores are left alone.
    pub fn normalise(&mut self, total: f64) {
        let old_total = self.total();
        if old_total == 0.0 {
            return;
        }
        for v in self.0.iter_mut() {
            *v = *v * total / old_total;
        }
    }
}

impl std::ops::Index<Power> for Scores {
    type Output = f64;

    fn index(&self, power: Power) -> &f64 {
        &self.0[power.index()]
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(POWER_COUNT))?;
        for (power, score) in self.iter() {
            map.serialize_entry(power.name(), &score)?;
        }
        map.end()
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, score) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{:.2}", power.abbreviation(), score)?;
            first = false;
        }
        Ok(())
    }
}

/// A named set of rules that scores a single game.
pub trait ScoringSystem: Send + Sync {
    /// Display name, unique within a registry.
    fn name(&self) -> &str;

    /// URL-safe form of the name.
    fn slug(&self) -> String {
        slugify(self.name())
    }

    /// Human-readable rules, filled in with this system's constants.
    fn description(&self) -> String;

    /// True if an eliminated power's score may still change with what
    /// happens to the other powers after its elimination.
    fn dead_score_can_change(&self) -> bool {
        false
    }

    /// Scores every power in the game.
    fn scores(&self, state: &dyn GameState) -> Result<Scores, StateError>;
}

impl fmt::Debug for dyn ScoringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringSystem").field("name", &self.name()).finish()
    }
}

/// Lower-cases `name`, drops anything that isn't alphanumeric, whitespace,
/// `_` or `-`, and joins the words with single hyphens.
pub fn slugify(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .flat_map(char::to_lowercase)
        .collect();
    cleaned
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Powers with their final centre counts, most centres first.
///
/// Ties keep canonical power order.
pub(crate) fn ranked_by_dots(state: &dyn GameState) -> Vec<(Power, u32)> {
    let mut dots: Vec<(Power, u32)> = ALL_POWERS
        .into_iter()
        .map(|p| (p, state.dot_count(p)))
        .collect();
    dots.sort_by(|a, b| b.1.cmp(&a.1));
    dots
}

/// Whole years from the first game year to `year`.
pub(crate) fn years_played(year: u16) -> f64 {
    f64::from(year) - f64::from(crate::board::FIRST_YEAR)
}

/// Soloer on a fixed score, everyone else on `loss`.
pub(crate) fn solo_scores(soloer: Power, win: f64, loss: f64) -> Scores {
    Scores::from_fn(|p| if p == soloer { win } else { loss })
}
