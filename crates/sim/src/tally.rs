// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Trial counters.
use std::ops;

/// The result of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player at this index has the only best hand.
    Player(usize),
    /// Two or more players share the best hand.
    Tie,
}

/// Win and tie counters for a number of trials.
///
/// Tallies from different tasks are merged by adding them:
///
/// ```
/// # use showdown_sim::{Tally, Winner};
/// let mut t1 = Tally::new(2);
/// t1.record(Winner::Player(0), 3);
///
/// let mut t2 = Tally::new(2);
/// t2.record(Winner::Tie, 1);
///
/// t1 += t2;
/// assert_eq!(t1.wins(), &[3, 0]);
/// assert_eq!(t1.ties(), 1);
/// assert_eq!(t1.trials(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<u64>,
    ties: u64,
    trials: u64,
}

impl Tally {
    /// Creates an empty tally for the given number of players.
    pub fn new(num_players: usize) -> Self {
        Self {
            wins: vec![0; num_players],
            ties: 0,
            trials: 0,
        }
    }

    /// Records `count` trials with the same winner.
    ///
    /// Panics if the winner is not a player in this tally.
    pub fn record(&mut self, winner: Winner, count: u64) {
        match winner {
            Winner::Player(idx) => self.wins[idx] += count,
            Winner::Tie => self.ties += count,
        }

        self.trials += count;
    }

    /// The number of wins for each player.
    pub fn wins(&self) -> &[u64] {
        &self.wins
    }

    /// The number of ties.
    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// The number of recorded trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// The percentage of trials won by a player.
    pub fn win_percentage(&self, player: usize) -> f64 {
        percentage(self.wins.get(player).copied().unwrap_or(0), self.trials)
    }

    /// The percentage of tied trials.
    pub fn tie_percentage(&self) -> f64 {
        percentage(self.ties, self.trials)
    }
}

impl ops::AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        if self.wins.len() < rhs.wins.len() {
            self.wins.resize(rhs.wins.len(), 0);
        }

        for (w, r) in self.wins.iter_mut().zip(rhs.wins) {
            *w += r;
        }

        self.ties += rhs.ties;
        self.trials += rhs.trials;
    }
}

impl ops::Add for Tally {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Self {
        iter.fold(Tally::default(), ops::Add::add)
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}
