//! Automated players for ML-chess
//!
//! This crate provides:
//! - Candidate collection across all of a side's pieces (optionally parallel)
//! - A turn driver: collect → select → apply → hand the turn over
//! - A self-play runner that alternates two drivers until the game ends
//! - TOML configuration for the `autoplay` harness
//!
//! # Usage
//!
//! ```bash
//! # Lookahead (white) against greedy capture (black), reproducible
//! cargo run -p autoplay -- play --white lookahead --black greedy --seed 7
//!
//! # One turn from a given placement
//! cargo run -p autoplay -- turn "4k3/8/8/3q4/8/8/8/3RK3 w" --strategy greedy
//! ```

mod collect;
mod config;
mod driver;
mod game;

pub use collect::*;
pub use config::*;
pub use driver::*;
pub use game::*;
