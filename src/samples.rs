//! A handful of fixed game endings for comparing scoring systems.

use crate::board::POWER_COUNT;
use crate::state::{SnapshotState, StateError};

/// A named game ending.
#[derive(Debug, Clone, Copy)]
pub struct SampleGame {
    pub label: &'static str,
    pub counts: [u32; POWER_COUNT],
    pub final_year: u16,
    pub eliminations: [Option<u16>; POWER_COUNT],
}

impl SampleGame {
    pub fn state(&self) -> Result<SnapshotState, StateError> {
        SnapshotState::new(self.counts, self.final_year, self.eliminations, None)
    }
}

pub const SAMPLE_GAMES: [SampleGame; 5] = [
    SampleGame {
        label: "England and Italy share the board",
        counts: [0, 17, 0, 0, 16, 1, 0],
        final_year: 1912,
        eliminations: [Some(1903), None, Some(1909), Some(1905), None, None, Some(1905)],
    },
    SampleGame {
        label: "Italy one short of a solo",
        counts: [2, 3, 3, 3, 17, 3, 3],
        final_year: 1910,
        eliminations: [None; POWER_COUNT],
    },
    SampleGame {
        label: "Long stalemate",
        counts: [6, 5, 5, 4, 4, 5, 5],
        final_year: 1919,
        eliminations: [None; POWER_COUNT],
    },
    SampleGame {
        label: "Three-way tie on top",
        counts: [11, 1, 0, 11, 11, 0, 0],
        final_year: 1909,
        eliminations: [None, None, Some(1905), None, None, Some(1906), Some(1909)],
    },
    SampleGame {
        label: "Germany tops a three-way",
        counts: [11, 0, 0, 12, 11, 0, 0],
        final_year: 1910,
        eliminations: [None, Some(1910), Some(1905), None, None, Some(1906), Some(1909)],
    },
];
