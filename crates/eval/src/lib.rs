// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator picks the
//! best 5 cards hand out of the given cards and returns a [HandStrength] that
//! is totally ordered following the standard poker hand rankings, with the
//! A-2-3-4-5 straight (the wheel) ranked as a five high straight.
//!
//! To use the evaluator pass the player hole cards and the board cards to
//! [evaluate]:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>())
//!         .collect::<Result<Vec<_>, _>>()
//!         .unwrap()
//! };
//!
//! let board = cards("QS JS TS 9H 8H");
//! let v1 = evaluate(&cards("AS KS"), &board).unwrap();
//! let v2 = evaluate(&cards("2H 3H"), &board).unwrap();
//! assert_eq!(v1.category(), HandCategory::RoyalFlush);
//! assert_eq!(v2.category(), HandCategory::Straight);
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    EvalError, HandCategory, HandStrength, evaluate, evaluate_five, evaluate_with_best_hand,
};

// Reexport cards types.
pub use showdown_cards::{Card, CardError, Deck, Rank, Suit};
