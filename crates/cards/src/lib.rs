// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let th = "10h".parse::<Card>().unwrap();
//! assert_eq!(th, Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(th.to_string(), "TH");
//! assert!(ah.cmp_rank(&th).is_gt());
//! ```
//!
//! and a [Deck] type for removing, drawing, and iterating cards in the deck.
//!
//! For example to count all the rivers that can complete a turn board:
//!
//! ```
//! # use showdown_cards::{Card, Deck};
//! let mut deck = Deck::default();
//! for c in ["AS", "KS", "QD", "JD", "2C", "7H"] {
//!     deck.remove(c.parse::<Card>().unwrap());
//! }
//!
//! let mut counter = 0;
//! deck.for_each(1, |river| {
//!     assert_eq!(river.len(), 1);
//!     counter += 1;
//! });
//! assert_eq!(counter, 46);
//! ```
//!
//! The [for_each_ksubset] function iterates k-subsets of indices and is used
//! to enumerate both deck completions and the 5 cards sub-hands of a 7 cards
//! hand.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Deck, Rank, Suit};

mod subsets;
pub use subsets::for_each_ksubset;
