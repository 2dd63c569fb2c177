// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand evaluation.
use showdown_cards::{Card, for_each_ksubset};
use thiserror::Error;

use super::{HandCategory, HandStrength};

/// The maximum number of cards in a hand.
const MAX_CARDS: usize = 7;

/// The number of cards in a poker hand.
const HAND_SIZE: usize = 5;

/// Rank values of the A-5-4-3-2 straight sorted in descending order.
const WHEEL: [u8; HAND_SIZE] = [14, 5, 4, 3, 2];

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Less than 5 cards to evaluate.
    #[error("Need at least 5 cards to evaluate a hand, got {0}")]
    InsufficientCards(usize),
    /// More than 7 cards to evaluate.
    #[error("Cannot evaluate more than 7 cards, got {0}")]
    TooManyCards(usize),
}

/// Evaluates the best 5 cards hand made of hole and board cards.
///
/// The total number of cards must be between 5 and 7.
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<HandStrength, EvalError> {
    evaluate_with_best_hand(hole, board).map(|(strength, _)| strength)
}

/// Evaluates the best 5 cards hand made of hole and board cards, returns the
/// hand strength and the five cards that make the hand.
pub fn evaluate_with_best_hand(
    hole: &[Card],
    board: &[Card],
) -> Result<(HandStrength, [Card; HAND_SIZE]), EvalError> {
    let n = hole.len() + board.len();
    if n < HAND_SIZE {
        return Err(EvalError::InsufficientCards(n));
    } else if n > MAX_CARDS {
        return Err(EvalError::TooManyCards(n));
    }

    let mut cards = Vec::with_capacity(n);
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);

    let mut best: Option<(HandStrength, [Card; HAND_SIZE])> = None;
    for_each_ksubset(n, HAND_SIZE, |idx| {
        let hand = [
            cards[idx[0]],
            cards[idx[1]],
            cards[idx[2]],
            cards[idx[3]],
            cards[idx[4]],
        ];

        let strength = evaluate_five(&hand);
        if best.is_none_or(|(b, _)| strength > b) {
            best = Some((strength, hand));
        }
    });

    // There is at least one subset as n >= 5.
    best.ok_or(EvalError::InsufficientCards(n))
}

/// Classifies a 5 cards hand.
pub fn evaluate_five(cards: &[Card; HAND_SIZE]) -> HandStrength {
    let mut ranks = cards.map(|c| c.rank().value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_wheel = ranks == WHEEL;
    let is_straight = is_wheel || ranks.windows(2).all(|w| w[0] == w[1] + 1);
    let high = if is_wheel { 5 } else { ranks[0] };

    if is_flush && is_straight {
        return if high == 14 {
            HandStrength::new(HandCategory::RoyalFlush, &[high])
        } else {
            HandStrength::new(HandCategory::StraightFlush, &[high])
        };
    }

    let groups = RankGroups::new(&ranks);
    let g = &groups.groups;

    match groups.counts() {
        [4, 1, ..] => HandStrength::new(HandCategory::FourOfAKind, &[g[0].1, g[1].1]),
        [3, 2, ..] => HandStrength::new(HandCategory::FullHouse, &[g[0].1, g[1].1]),
        _ if is_flush => HandStrength::new(HandCategory::Flush, &ranks),
        _ if is_straight => HandStrength::new(HandCategory::Straight, &[high]),
        [3, ..] => HandStrength::new(HandCategory::ThreeOfAKind, &[g[0].1, g[1].1, g[2].1]),
        [2, 2, ..] => HandStrength::new(HandCategory::TwoPair, &[g[0].1, g[1].1, g[2].1]),
        [2, ..] => HandStrength::new(HandCategory::OnePair, &[g[0].1, g[1].1, g[2].1, g[3].1]),
        _ => HandStrength::new(HandCategory::HighCard, &ranks),
    }
}

/// Ranks grouped by count, sorted by count and then rank in descending order.
struct RankGroups {
    /// The (count, rank) pairs, zero padded.
    groups: [(u8, u8); HAND_SIZE],
}

impl RankGroups {
    /// Groups ranks sorted in descending order.
    fn new(ranks: &[u8; HAND_SIZE]) -> Self {
        let mut groups = [(0u8, 0u8); HAND_SIZE];
        let mut len = 0;

        for &rank in ranks {
            if len > 0 && groups[len - 1].1 == rank {
                groups[len - 1].0 += 1;
            } else {
                groups[len] = (1, rank);
                len += 1;
            }
        }

        // Stable sort keeps higher ranks first for equal counts.
        groups[..len].sort_by(|a, b| b.0.cmp(&a.0));
        Self { groups }
    }

    /// The group counts.
    fn counts(&self) -> [u8; HAND_SIZE] {
        self.groups.map(|(count, _)| count)
    }
}
