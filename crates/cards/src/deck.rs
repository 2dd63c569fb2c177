// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

use crate::for_each_ksubset;

/// Error returned when a string doesn't describe a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The string is not a rank symbol followed by a suit symbol.
    #[error("Invalid card format: '{0}'")]
    InvalidFormat(String),
}

/// A Poker card.
///
/// A card is a rank and suit pair, its canonical string is the rank symbol
/// followed by the suit symbol (i.e. `AS`, `TD`, `7H`). Cards are parsed
/// case-insensitively and accept both `T` and `10` for tens:
///
/// ```
/// # use showdown_cards::{Card, Rank, Suit};
/// let c = "10d".parse::<Card>().unwrap();
/// assert_eq!(c.rank(), Rank::Ten);
/// assert_eq!(c.suit(), Suit::Diamonds);
/// assert_eq!(c.to_string().parse::<Card>().unwrap(), c);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Compares two cards by rank strength, suits are ignored.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidFormat(s.to_string());

        // The suit is the last character, everything before it is the rank.
        let (suit_pos, suit) = s.char_indices().last().ok_or_else(invalid)?;
        let rank = &s[..suit_pos];
        if rank.is_empty() || rank.chars().count() > 2 {
            return Err(invalid());
        }

        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank.
///
/// The discriminant is the rank strength used for ordering and tie breaks,
/// from 2 for a deuce to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey = 3,
    /// Four
    Four = 4,
    /// Five
    Five = 5,
    /// Six
    Six = 6,
    /// Seven
    Seven = 7,
    /// Eight
    Eight = 8,
    /// Nine
    Nine = 9,
    /// Ten
    Ten = 10,
    /// Jack
    Jack = 11,
    /// Queen
    Queen = 12,
    /// King
    King = 13,
    /// Ace
    Ace = 14,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank strength, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Parses a rank symbol, case-insensitive.
    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        let rank = match symbol.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }

    /// Parses a suit symbol, case-insensitive.
    pub fn from_symbol(symbol: char) -> Option<Suit> {
        match symbol.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals the card at the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws a card uniformly at random and removes it from the deck.
    ///
    /// The card is swapped with the last card, so this is O(1) but changes
    /// the order of the remaining cards.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let idx = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(idx))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck, returns false if the card was not found.
    pub fn remove(&mut self, card: Card) -> bool {
        let count = self.cards.len();
        self.cards.retain(|c| c != &card);
        self.cards.len() < count
    }

    /// The cards in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calls the `f` closure for each k-cards subset of the deck.
    ///
    /// Panics if k > 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(k <= 7, "k={k} must be 0 <= k <= 7");

        let mut h = Vec::with_capacity(k);
        for_each_ksubset(self.cards.len(), k, |subset| {
            h.clear();
            h.extend(subset.iter().map(|&pos| self.cards[pos]));
            f(&h);
        });
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn card_uniqueness() {
        let mut cards = HashSet::default();
        let mut names = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            cards.insert(card);
            names.insert(card.to_string());
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(names.len(), Deck::SIZE);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_parse() {
        assert_eq!(card("AS"), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(card("kh"), Card::new(Rank::King, Suit::Hearts));
        assert_eq!(card("10D"), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(card("tc"), Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!(card("2c"), Card::new(Rank::Deuce, Suit::Clubs));

        // All cards survive a string round trip.
        for c in Deck::default() {
            assert_eq!(card(&c.to_string()), c);
        }
    }

    #[test]
    fn card_parse_errors() {
        for s in ["", "A", "S", "1S", "11S", "AX", "ZS", "A S", "10", "100S", "KKH", "♠A"] {
            assert_eq!(
                s.parse::<Card>(),
                Err(CardError::InvalidFormat(s.to_string())),
                "{s}"
            );
        }

        let err = "XX".parse::<Card>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid card format: 'XX'");
    }

    #[test]
    fn rank_ordering() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);

        // Suits are ignored when comparing by rank.
        assert!(card("AH").cmp_rank(&card("AS")).is_eq());
        assert!(card("2S").cmp_rank(&card("3H")).is_lt());
        assert!(card("KC").cmp_rank(&card("QD")).is_gt());
    }

    #[test]
    fn card_serde() {
        let json = serde_json::to_string(&card("10h")).unwrap();
        assert_eq!(json, "\"TH\"");

        let c: Card = serde_json::from_str("\"qs\"").unwrap();
        assert_eq!(c, card("QS"));

        assert!(serde_json::from_str::<Card>("\"1S\"").is_err());
    }

    #[test]
    fn deck_draw() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::default();
        assert!(deck.remove(card("AS")));
        assert!(!deck.remove(card("AS")));
        assert!(!deck.contains(card("AS")));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let mut drawn = HashSet::default();
        while let Some(c) = deck.draw(&mut rng) {
            assert_ne!(c, card("AS"));
            drawn.insert(c);
        }

        assert_eq!(drawn.len(), Deck::SIZE - 1);
        assert_eq!(deck.draw(&mut rng), None);
    }

    #[test]
    fn deck_draw_seeded() {
        let draw = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut deck = Deck::default();
            (0..5).filter_map(|_| deck.draw(&mut rng)).collect::<Vec<_>>()
        };

        assert_eq!(draw(42), draw(42));
        assert_eq!(draw(42).len(), 5);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        let mut count = 0;
        deck.for_each(0, |cards| {
            assert!(cards.is_empty());
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        for c in ["AD", "KD", "QD", "JD", "TD", "9D", "8D"] {
            deck.remove(card(c));
        }

        let mut count = 0;
        deck.for_each(2, |cards| {
            assert!(!cards.contains(&card("AD")));
            count += 1;
        });
        assert_eq!(count, 990);
    }
}
