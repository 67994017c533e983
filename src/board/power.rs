//! The seven great powers and the standard board constants.
//!
//! Powers are enumerated in the canonical (alphabetical) order used for
//! iteration and display. The `#[repr(u8)]` discriminant doubles as an
//! array index, so per-power data can live in `[T; POWER_COUNT]`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of great powers in a standard game.
pub const POWER_COUNT: usize = 7;

/// The number of supply centers on the standard Diplomacy map.
pub const SUPPLY_CENTER_COUNT: u32 = 34;

/// Supply centers needed for an outright win.
pub const WINNING_SCS: u32 = 18;

/// The first year in which orders are played.
///
/// Centre counts for `FIRST_YEAR - 1` describe the starting position.
pub const FIRST_YEAR: u16 = 1901;

/// One of the seven great powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Power {
    #[serde(alias = "A")]
    Austria = 0,
    #[serde(alias = "E")]
    England = 1,
    #[serde(alias = "F")]
    France = 2,
    #[serde(alias = "G")]
    Germany = 3,
    #[serde(alias = "I")]
    Italy = 4,
    #[serde(alias = "R")]
    Russia = 5,
    #[serde(alias = "T")]
    Turkey = 6,
}

/// All seven powers in standard order.
pub const ALL_POWERS: [Power; POWER_COUNT] = [
    Power::Austria,
    Power::England,
    Power::France,
    Power::Germany,
    Power::Italy,
    Power::Russia,
    Power::Turkey,
];

impl Power {
    /// Returns the lowercase full name of this power.
    pub const fn name(self) -> &'static str {
        match self {
            Power::Austria => "austria",
            Power::England => "england",
            Power::France => "france",
            Power::Germany => "germany",
            Power::Italy => "italy",
            Power::Russia => "russia",
            Power::Turkey => "turkey",
        }
    }

    /// Returns the single-character abbreviation.
    pub const fn abbreviation(self) -> char {
        match self {
            Power::Austria => 'A',
            Power::England => 'E',
            Power::France => 'F',
            Power::Germany => 'G',
            Power::Italy => 'I',
            Power::Russia => 'R',
            Power::Turkey => 'T',
        }
    }

    /// Index into per-power arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}
