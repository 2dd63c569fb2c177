// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and strength.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// A poker hand category, serialized with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    #[serde(rename = "High Card")]
    HighCard,
    /// One pair.
    #[serde(rename = "One Pair")]
    OnePair,
    /// Two pair.
    #[serde(rename = "Two Pair")]
    TwoPair,
    /// Three of a kind.
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    /// Straight.
    #[serde(rename = "Straight")]
    Straight,
    /// Flush.
    #[serde(rename = "Flush")]
    Flush,
    /// Full house.
    #[serde(rename = "Full House")]
    FullHouse,
    /// Four of a kind.
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    /// Straight flush.
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    /// Royal flush.
    #[serde(rename = "Royal Flush")]
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category rank from 1 for high card to 10 for a royal flush.
    pub fn rank(&self) -> u8 {
        match self {
            HandCategory::HighCard => 1,
            HandCategory::OnePair => 2,
            HandCategory::TwoPair => 3,
            HandCategory::ThreeOfAKind => 4,
            HandCategory::Straight => 5,
            HandCategory::Flush => 6,
            HandCategory::FullHouse => 7,
            HandCategory::FourOfAKind => 8,
            HandCategory::StraightFlush => 9,
            HandCategory::RoyalFlush => 10,
        }
    }

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of a 5 cards hand.
///
/// Strengths compare by category first and then by the category tie breaks,
/// equal strengths are a split pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandStrength {
    category: HandCategory,
    tiebreaks: [u8; 5],
    len: u8,
}

impl HandStrength {
    /// Creates a strength with the given tie breaks, most significant first.
    ///
    /// Panics if there are more than 5 tie breaks.
    pub fn new(category: HandCategory, tiebreaks: &[u8]) -> Self {
        assert!(tiebreaks.len() <= 5, "At most 5 tie breaks");

        let mut s = Self {
            category,
            tiebreaks: [0; 5],
            len: tiebreaks.len() as u8,
        };

        s.tiebreaks[..tiebreaks.len()].copy_from_slice(tiebreaks);
        s
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie break rank values, most significant first.
    pub fn tiebreaks(&self) -> &[u8] {
        &self.tiebreaks[..self.len as usize]
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreaks().cmp(other.tiebreaks()))
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreaks())
    }
}
