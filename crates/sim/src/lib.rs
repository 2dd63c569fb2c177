// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker equity simulator.
//!
//! Estimates the probability of each player having the best hand at showdown
//! given their hole cards and 0 to 5 board cards. Each trial completes the
//! board with cards drawn at random from the cards left in the deck, the
//! player with the strongest hand wins the trial and when two or more
//! players share the strongest hand the trial counts as a single tie.
//!
//! ```
//! # use showdown_sim::*;
//! let card = |s: &str| s.parse::<Card>().unwrap();
//! let players = vec![
//!     Player::new("Alice", [card("AS"), card("KS")]),
//!     Player::new("Bob", [card("2H"), card("3H")]),
//! ];
//! let board = ["QS", "JS", "TS", "9H", "8H"].map(card).to_vec();
//!
//! let sim = Simulator::new(players, board).unwrap();
//! let outcome = sim.simulate(&Config { trials: 1_000, ..Config::default() }).unwrap();
//!
//! assert_eq!(outcome.players[0].win_percentage, 100.0);
//! assert_eq!(outcome.players[1].win_percentage, 0.0);
//! assert_eq!(outcome.players[0].showdown.unwrap().category, HandCategory::RoyalFlush);
//! ```
//!
//! Trials run on [Config::tasks] threads, each thread with its own copy of
//! the deck, tally, and random generator. Random generators are derived from
//! [Config::seed] so that a simulation with a given seed and number of tasks
//! is reproducible.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod config;
pub use config::Config;

mod error;
pub use error::SimError;

mod outcome;
pub use outcome::{Outcome, PlayerOutcome, Showdown};

mod simulator;
pub use simulator::{Player, Simulator};

mod tally;
pub use tally::{Tally, Winner};

// Reexport cards and evaluator types.
pub use showdown_eval::{
    Card, CardError, Deck, EvalError, HandCategory, HandStrength, Rank, Suit,
};
