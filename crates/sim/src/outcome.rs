// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation outcome.
use serde::{Deserialize, Serialize};

use showdown_eval::{Card, HandCategory};

/// The outcome of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// The players outcomes in the order the players were given.
    pub players: Vec<PlayerOutcome>,
    /// The percentage of trials where two or more players tied.
    pub tie_percentage: f64,
    /// The number of trials.
    pub trials: u64,
}

/// A player outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    /// The player name.
    pub name: String,
    /// The percentage of trials won by this player alone.
    pub win_percentage: f64,
    /// The player hand when the board is complete.
    pub showdown: Option<Showdown>,
}

/// A player hand at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    /// The hand category.
    pub category: HandCategory,
    /// The five cards that make the hand.
    pub cards: [Card; 5],
}

impl Outcome {
    /// Returns the outcome for a player.
    pub fn player(&self, name: &str) -> Option<&PlayerOutcome> {
        self.players.iter().find(|p| p.name == name)
    }

    /// The sum of all win and tie percentages, 100 up to rounding errors.
    pub fn total_percentage(&self) -> f64 {
        self.players.iter().map(|p| p.win_percentage).sum::<f64>() + self.tie_percentage
    }
}
