// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation errors.
use showdown_eval::{Card, EvalError};
use thiserror::Error;

/// Simulation errors, all detected before the first trial runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A card appears more than once across hole cards and board.
    #[error("Duplicate card found: {0}")]
    DuplicateCard(Card),
    /// More than 5 board cards.
    #[error("Cannot have more than 5 community cards, got {0}")]
    InvalidBoardSize(usize),
    /// Zero trials.
    #[error("Number of simulations must be positive")]
    InvalidTrialCount,
    /// No players to simulate.
    #[error("At least one player is required")]
    NoPlayers,
    /// Ran out of cards while completing the board.
    #[error("No cards left in the deck")]
    EmptyDeck,
    /// Hand evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
