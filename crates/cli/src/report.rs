// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation response.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_sim::{Card, HandCategory, Outcome};

/// A player result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResult {
    /// The player name.
    pub name: String,
    /// The percentage of trials won by this player.
    pub win_percentage: f64,
    /// The player hand category, only when the board is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_hand_rank: Option<HandCategory>,
    /// The player best five cards, only when the board is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_hand: Option<[Card; 5]>,
}

/// A simulation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    /// The players results.
    pub player_results: Vec<PlayerResult>,
    /// The percentage of tied trials.
    pub tie_percentage: f64,
    /// The number of trials.
    pub total_simulations: u64,
}

impl From<Outcome> for SimulationResponse {
    fn from(outcome: Outcome) -> Self {
        let player_results = outcome
            .players
            .into_iter()
            .map(|p| PlayerResult {
                name: p.name,
                win_percentage: p.win_percentage,
                best_hand_rank: p.showdown.map(|s| s.category),
                best_hand: p.showdown.map(|s| s.cards),
            })
            .collect();

        Self {
            player_results,
            tie_percentage: outcome.tie_percentage,
            total_simulations: outcome.trials,
        }
    }
}

impl fmt::Display for SimulationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .player_results
            .iter()
            .map(|p| p.name.chars().count())
            .chain(Some("Ties".len()))
            .max()
            .unwrap_or_default();

        for p in &self.player_results {
            write!(f, "{:<width$} {:>7.2}%", p.name, p.win_percentage)?;

            if let (Some(rank), Some(cards)) = (p.best_hand_rank, p.best_hand) {
                write!(f, "  {rank} (")?;
                for (idx, card) in cards.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }

                    write!(f, "{card}")?;
                }

                f.write_str(")")?;
            }

            writeln!(f)?;
        }

        writeln!(f, "{:<width$} {:>7.2}%", "Ties", self.tie_percentage)?;
        write!(f, "Trials: {}", self.total_simulations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_sim::{Config, Player, Simulator};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn royal_flush_response() -> SimulationResponse {
        let players = vec![
            Player::new("Alice", cards("AS KS").try_into().unwrap()),
            Player::new("Bob", cards("2H 3H").try_into().unwrap()),
        ];
        let sim = Simulator::new(players, cards("QS JS TS 9H 8H")).unwrap();
        let config = Config {
            trials: 10,
            tasks: 1,
            seed: Some(1),
        };

        sim.simulate(&config).unwrap().into()
    }

    #[test]
    fn response_json() {
        let json = serde_json::to_value(royal_flush_response()).unwrap();

        assert_eq!(json["totalSimulations"], 10);
        assert_eq!(json["tiePercentage"], 0.0);
        assert_eq!(json["playerResults"][0]["name"], "Alice");
        assert_eq!(json["playerResults"][0]["winPercentage"], 100.0);
        assert_eq!(json["playerResults"][0]["bestHandRank"], "Royal Flush");
        assert_eq!(json["playerResults"][1]["bestHandRank"], "Straight");
        assert_eq!(json["playerResults"][1]["bestHand"][0], "QS");
    }

    #[test]
    fn response_json_without_showdown() {
        let response = SimulationResponse {
            player_results: vec![PlayerResult {
                name: "Alice".to_string(),
                win_percentage: 50.0,
                best_hand_rank: None,
                best_hand: None,
            }],
            tie_percentage: 1.5,
            total_simulations: 200,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("bestHandRank"));
        assert!(!json.contains("bestHand"));
    }

    #[test]
    fn response_table() {
        let table = royal_flush_response().to_string();
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Alice  100.00%  Royal Flush (AS KS QS JS TS)");
        assert!(lines[1].starts_with("Bob      0.00%  Straight ("));
        assert_eq!(lines[2], "Ties     0.00%");
        assert_eq!(lines[3], "Trials: 10");
    }
}
