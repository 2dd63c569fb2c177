// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation request parsing and validation.
use ahash::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use showdown_sim::{Card, CardError, Config, Player, SimError, Simulator};

/// The maximum number of simulations for a request.
pub const MAX_SIMULATIONS: i64 = 1_000_000;

/// Request validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Less than two players.
    #[error("At least 2 players are required for a poker game, got {0}")]
    InvalidPlayerCount(usize),
    /// A player with an empty name.
    #[error("Player name cannot be empty")]
    EmptyPlayerName,
    /// Two players with the same name.
    #[error("Duplicate player name: {0}")]
    DuplicatePlayerName(String),
    /// A player without exactly two hole cards.
    #[error("Player {name} must have exactly 2 hole cards, got {count}")]
    InvalidHoleCards {
        /// The player name.
        name: String,
        /// The number of hole cards.
        count: usize,
    },
    /// More than five community cards.
    #[error("Cannot have more than 5 community cards, got {0}")]
    InvalidBoardSize(usize),
    /// Simulations count out of range.
    #[error("Number of simulations must be between 1 and 1,000,000, got {0}")]
    InvalidTrialCount(i64),
    /// A player argument that is not NAME:CARD,CARD.
    #[error("Invalid player '{0}', expected NAME:CARD,CARD")]
    InvalidPlayer(String),
    /// A card string that is not a card.
    #[error(transparent)]
    InvalidCard(#[from] CardError),
    /// The simulation rejected the request cards.
    #[error(transparent)]
    Simulation(#[from] SimError),
}

/// A player in a simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    /// The player name.
    pub name: String,
    /// The player hole cards strings.
    pub hole_cards: Vec<String>,
}

impl PlayerRequest {
    /// Parses a player from a `NAME:CARD,CARD` string.
    pub fn parse(s: &str) -> Result<Self, RequestError> {
        let (name, cards) = s
            .split_once(':')
            .ok_or_else(|| RequestError::InvalidPlayer(s.to_string()))?;

        Ok(Self {
            name: name.trim().to_string(),
            hole_cards: cards.split(',').map(|c| c.trim().to_string()).collect(),
        })
    }

    fn validate(&self) -> Result<(), RequestError> {
        if self.name.trim().is_empty() {
            return Err(RequestError::EmptyPlayerName);
        }

        if self.hole_cards.len() != 2 {
            return Err(RequestError::InvalidHoleCards {
                name: self.name.clone(),
                count: self.hole_cards.len(),
            });
        }

        Ok(())
    }
}

/// A simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// The players.
    pub players: Vec<PlayerRequest>,
    /// The community cards strings.
    #[serde(default)]
    pub community_cards: Vec<String>,
    /// The number of simulations.
    pub number_of_simulations: i64,
}

impl SimulationRequest {
    /// Checks the request shape and bounds, the cards are checked when
    /// creating the simulator.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.players.len() < 2 {
            return Err(RequestError::InvalidPlayerCount(self.players.len()));
        }

        if !(1..=MAX_SIMULATIONS).contains(&self.number_of_simulations) {
            return Err(RequestError::InvalidTrialCount(
                self.number_of_simulations,
            ));
        }

        if self.community_cards.len() > Simulator::BOARD_SIZE {
            return Err(RequestError::InvalidBoardSize(self.community_cards.len()));
        }

        let mut names = HashSet::default();
        for player in &self.players {
            player.validate()?;

            if !names.insert(player.name.as_str()) {
                return Err(RequestError::DuplicatePlayerName(player.name.clone()));
            }
        }

        Ok(())
    }

    /// Validates the request and creates a simulator for it.
    pub fn simulator(&self) -> Result<Simulator, RequestError> {
        self.validate()?;

        let players = self
            .players
            .iter()
            .map(|p| -> Result<Player, RequestError> {
                let [c1, c2] = [&p.hole_cards[0], &p.hole_cards[1]].map(|c| c.parse::<Card>());
                Ok(Player::new(p.name.clone(), [c1?, c2?]))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let board = self
            .community_cards
            .iter()
            .map(|c| c.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Simulator::new(players, board)?)
    }

    /// The simulation config for this request.
    pub fn config(&self, tasks: usize, seed: Option<u64>) -> Config {
        Config {
            trials: self.number_of_simulations.max(0) as u64,
            tasks,
            seed,
        }
    }
}
