//! JSON description of a game to be scored.
//!
//! Accepts either a final snapshot:
//!
//! ```json
//! { "final_year": 1907,
//!   "centres": { "austria": 0, "england": 17, "france": 0, "germany": 0,
//!                "italy": 16, "russia": 1, "turkey": 0 },
//!   "eliminations": { "austria": 1903, "france": 1907,
//!                     "germany": 1905, "turkey": 1905 } }
//! ```
//!
//! or a full chart, keyed by year:
//!
//! ```json
//! { "years": { "1901": { "austria": 5, ... }, "1902": { ... } },
//!   "draw": { "powers": ["england", "italy"] } }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::board::{Power, ALL_POWERS, POWER_COUNT};

use super::{ChartState, Draw, GameState, SnapshotState, StateError};

/// Errors from reading a game description.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid game JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid game: {0}")]
    State(#[from] StateError),
}

/// A passed draw as written in JSON. The year defaults to the final year.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawInput {
    pub powers: Vec<Power>,
    #[serde(default)]
    pub year: Option<u16>,
}

impl DrawInput {
    fn into_draw(self, final_year: u16) -> Result<Draw, StateError> {
        Draw::new(self.powers, self.year.unwrap_or(final_year))
    }
}

/// Either shape of game description.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GameInput {
    Snapshot {
        final_year: u16,
        centres: HashMap<Power, u32>,
        #[serde(default)]
        eliminations: HashMap<Power, u16>,
        #[serde(default)]
        draw: Option<DrawInput>,
    },
    /// Years are JSON object keys, so they arrive as strings.
    Chart {
        years: BTreeMap<String, HashMap<Power, u32>>,
        #[serde(default)]
        draw: Option<DrawInput>,
    },
}

impl GameInput {
    /// Parses a game description from JSON text.
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validates the description and builds the matching game state.
    pub fn into_state(self) -> Result<Box<dyn GameState + Send + Sync>, StateError> {
        match self {
            GameInput::Snapshot {
                final_year,
                centres,
                eliminations,
                draw,
            } => {
                let counts = complete_counts(&centres, final_year)?;
                let mut years = [None; POWER_COUNT];
                for (power, year) in eliminations {
                    years[power.index()] = Some(year);
                }
                let draw = draw.map(|d| d.into_draw(final_year)).transpose()?;
                Ok(Box::new(SnapshotState::new(counts, final_year, years, draw)?))
            }
            GameInput::Chart { years, draw } => {
                let mut chart = BTreeMap::new();
                for (key, centres) in &years {
                    let year = parse_year(key)?;
                    chart.insert(year, complete_counts(centres, year)?);
                }
                let final_year = chart
                    .last_key_value()
                    .map(|(&y, _)| y)
                    .ok_or(StateError::EmptyChart)?;
                let draw = draw.map(|d| d.into_draw(final_year)).transpose()?;
                Ok(Box::new(ChartState::new(chart, draw)?))
            }
        }
    }
}

/// Reads a game description from JSON and builds its state in one step.
pub fn parse_game(text: &str) -> Result<Box<dyn GameState + Send + Sync>, InputError> {
    Ok(GameInput::from_json(text)?.into_state()?)
}

fn parse_year(key: &str) -> Result<u16, StateError> {
    key.trim()
        .parse()
        .map_err(|_| StateError::BadYear(key.to_string()))
}

fn complete_counts(
    centres: &HashMap<Power, u32>,
    year: u16,
) -> Result<[u32; POWER_COUNT], StateError> {
    let mut counts = [0; POWER_COUNT];
    for power in ALL_POWERS {
        counts[power.index()] = *centres
            .get(&power)
            .ok_or(StateError::MissingPower { power, year })?;
    }
    Ok(counts)
}
