//! Palmerston -- Diplomacy game scoring for tournaments.
//!
//! Exposes the game-state model, the scoring systems, the standard
//! registry and batch helpers for use by integration tests and the binary
//! entry point.

pub mod batch;
pub mod board;
pub mod cli;
pub mod registry;
pub mod samples;
pub mod scoring;
pub mod state;
