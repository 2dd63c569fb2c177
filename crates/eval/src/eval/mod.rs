// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies each 5 cards sub-hand of a 5, 6, or 7 cards hand
//! and keeps the strongest one. The [evaluate] function returns the hand
//! strength only, useful for computing odds and other stats, and
//! [evaluate_with_best_hand] also returns the five cards that make the hand,
//! useful to show a winning hand.
//!
//! A [HandStrength] is a [HandCategory] followed by the tie break ranks for
//! that category, most significant first:
//!
//! | Category        | Tie breaks                           |
//! |-----------------|--------------------------------------|
//! | Royal Flush     | ace                                  |
//! | Straight Flush  | high card (5 for the wheel)          |
//! | Four of a Kind  | quads rank, kicker                   |
//! | Full House      | trips rank, pair rank                |
//! | Flush           | all five ranks                       |
//! | Straight        | high card (5 for the wheel)          |
//! | Three of a Kind | trips rank, two kickers              |
//! | Two Pair        | high pair, low pair, kicker          |
//! | One Pair        | pair rank, three kickers             |
//! | High Card       | all five ranks                       |

mod evaluator;
pub use evaluator::{EvalError, evaluate, evaluate_five, evaluate_with_best_hand};

mod strength;
pub use strength::{HandCategory, HandStrength};
