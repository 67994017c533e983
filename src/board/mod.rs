//! Board constants shared by every scoring system.
//!
//! Contains the great powers and the standard-map numbers scoring rules
//! are written against.

pub mod power;

pub use power::{
    Power, ALL_POWERS, FIRST_YEAR, POWER_COUNT, SUPPLY_CENTER_COUNT, WINNING_SCS,
};
