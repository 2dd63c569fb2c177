// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte-Carlo showdown simulator.
use ahash::HashSet;
use log::{debug, info};
use rand::prelude::*;
use std::{cmp::Ordering, fmt, panic, thread, time::Instant};

use showdown_eval::{Card, Deck, HandStrength, evaluate, evaluate_with_best_hand};

use crate::{Config, Outcome, PlayerOutcome, Showdown, SimError, Tally, Winner};

/// A player and its hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hole: [Card; 2],
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, hole: [Card; 2]) -> Self {
        Self {
            name: name.into(),
            hole,
        }
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player hole cards.
    pub fn hole(&self) -> [Card; 2] {
        self.hole
    }
}

/// Simulates showdowns for players with known hole cards.
#[derive(Debug, Clone)]
pub struct Simulator {
    players: Vec<Player>,
    board: Vec<Card>,
    /// The deck without the players and board cards.
    deck: Deck,
}

impl Simulator {
    /// The number of cards in a complete board.
    pub const BOARD_SIZE: usize = 5;

    /// Creates a simulator for the given players and board.
    ///
    /// Fails if a card appears more than once across all the players hole
    /// cards and the board, or if the board has more than 5 cards.
    pub fn new(players: Vec<Player>, board: Vec<Card>) -> Result<Self, SimError> {
        if players.is_empty() {
            return Err(SimError::NoPlayers);
        }

        if board.len() > Self::BOARD_SIZE {
            return Err(SimError::InvalidBoardSize(board.len()));
        }

        let mut seen = HashSet::default();
        let mut deck = Deck::default();

        let cards = players.iter().flat_map(|p| p.hole).chain(board.iter().copied());
        for card in cards {
            if !seen.insert(card) {
                return Err(SimError::DuplicateCard(card));
            }

            deck.remove(card);
        }

        Ok(Self {
            players,
            board,
            deck,
        })
    }

    /// The players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The fixed board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The cards that can complete the board.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Runs the simulation with the given config.
    ///
    /// The trials are split across `config.tasks` threads, each thread with
    /// its own random generator derived from `config.seed`.
    pub fn simulate(&self, config: &Config) -> Result<Outcome, SimError> {
        if config.trials == 0 {
            return Err(SimError::InvalidTrialCount);
        }

        let num_tasks = config.num_tasks();
        info!(
            "Simulating {} trials for {} players on board [{}] with {} tasks",
            config.trials,
            self.players.len(),
            CardList(&self.board),
            num_tasks
        );

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        // Derive each task generator from the main generator so that tasks
        // draw from independent streams.
        let task_rngs = (0..num_tasks)
            .map(|_| SmallRng::from_rng(&mut rng))
            .collect::<Vec<_>>();

        let now = Instant::now();
        let tally = thread::scope(|s| {
            let handles = task_rngs
                .into_iter()
                .enumerate()
                .map(|(task_id, mut rng)| {
                    let trials = config.task_trials(task_id);
                    s.spawn(move || {
                        let tally = self.run(trials, &mut rng);
                        debug!("Task {task_id} completed {trials} trials: {tally:?}");
                        tally
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .sum::<Result<Tally, SimError>>()
        })?;

        info!(
            "Completed {} trials in {:.3}s",
            tally.trials(),
            now.elapsed().as_secs_f64()
        );

        self.outcome(&tally)
    }

    /// Runs `trials` trials sequentially drawing cards with the given
    /// generator.
    ///
    /// If the board is complete all trials have the same result and the
    /// showdown is evaluated only once.
    pub fn run<R: Rng + ?Sized>(&self, trials: u64, rng: &mut R) -> Result<Tally, SimError> {
        let mut tally = Tally::new(self.players.len());
        if trials == 0 {
            return Ok(tally);
        }

        if self.board.len() == Self::BOARD_SIZE {
            tally.record(self.winner(&self.board)?, trials);
            return Ok(tally);
        }

        let mut board = Vec::with_capacity(Self::BOARD_SIZE);
        for _ in 0..trials {
            let mut deck = self.deck.clone();

            board.clear();
            board.extend_from_slice(&self.board);
            while board.len() < Self::BOARD_SIZE {
                board.push(deck.draw(rng).ok_or(SimError::EmptyDeck)?);
            }

            tally.record(self.winner(&board)?, 1);
        }

        Ok(tally)
    }

    /// Computes the exact outcome by visiting every possible board completion
    /// once, the number of trials is the number of completions.
    pub fn enumerate(&self) -> Result<Outcome, SimError> {
        let missing = Self::BOARD_SIZE - self.board.len();
        info!(
            "Enumerating {missing} cards boards for {} players on board [{}]",
            self.players.len(),
            CardList(&self.board),
        );

        let now = Instant::now();
        let mut tally = Tally::new(self.players.len());
        let mut board = Vec::with_capacity(Self::BOARD_SIZE);
        let mut res: Result<(), SimError> = Ok(());

        self.deck.for_each(missing, |cards| {
            if res.is_err() {
                return;
            }

            board.clear();
            board.extend_from_slice(&self.board);
            board.extend_from_slice(cards);

            match self.winner(&board) {
                Ok(winner) => tally.record(winner, 1),
                Err(e) => res = Err(e),
            }
        });

        res?;

        info!(
            "Enumerated {} boards in {:.3}s",
            tally.trials(),
            now.elapsed().as_secs_f64()
        );

        self.outcome(&tally)
    }

    /// Finds the winner for a complete board.
    fn winner(&self, board: &[Card]) -> Result<Winner, SimError> {
        let mut best: Option<HandStrength> = None;
        let mut winner = 0;
        let mut num_winners = 0;

        for (idx, player) in self.players.iter().enumerate() {
            let strength = evaluate(&player.hole, board)?;
            match best.map(|b| strength.cmp(&b)) {
                None | Some(Ordering::Greater) => {
                    best = Some(strength);
                    winner = idx;
                    num_winners = 1;
                }
                Some(Ordering::Equal) => num_winners += 1,
                Some(Ordering::Less) => {}
            }
        }

        Ok(if num_winners == 1 {
            Winner::Player(winner)
        } else {
            Winner::Tie
        })
    }

    /// Converts a tally to percentages, adds the players hands if the board
    /// is complete.
    fn outcome(&self, tally: &Tally) -> Result<Outcome, SimError> {
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(idx, player)| -> Result<PlayerOutcome, SimError> {
                let showdown = if self.board.len() == Self::BOARD_SIZE {
                    let (strength, cards) = evaluate_with_best_hand(&player.hole, &self.board)?;
                    Some(Showdown {
                        category: strength.category(),
                        cards,
                    })
                } else {
                    None
                };

                Ok(PlayerOutcome {
                    name: player.name.clone(),
                    win_percentage: tally.win_percentage(idx),
                    showdown,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Outcome {
            players,
            tie_percentage: tally.tie_percentage(),
            trials: tally.trials(),
        })
    }
}

/// Formats a list of cards separated by spaces.
struct CardList<'a>(&'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::HandCategory;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn player(name: &str, hole: &str) -> Player {
        Player::new(name, cards(hole).try_into().unwrap())
    }

    fn config(trials: u64, tasks: usize, seed: u64) -> Config {
        Config {
            trials,
            tasks,
            seed: Some(seed),
        }
    }

    fn heads_up(p1: &str, p2: &str, board: &str) -> Simulator {
        let players = vec![player("Alice", p1), player("Bob", p2)];
        Simulator::new(players, cards(board)).unwrap()
    }

    #[test]
    fn duplicate_cards() {
        let players = vec![player("Alice", "AS AH"), player("Bob", "AS KC")];
        let err = Simulator::new(players, vec![]).unwrap_err();
        assert_eq!(err, SimError::DuplicateCard("AS".parse().unwrap()));
        assert_eq!(err.to_string(), "Duplicate card found: AS");

        let players = vec![player("Alice", "AS AH"), player("Bob", "KD KC")];
        let err = Simulator::new(players, cards("2C 3C KD")).unwrap_err();
        assert_eq!(err, SimError::DuplicateCard("KD".parse().unwrap()));

        let players = vec![player("Alice", "QS QS"), player("Bob", "KD KC")];
        let err = Simulator::new(players, vec![]).unwrap_err();
        assert_eq!(err, SimError::DuplicateCard("QS".parse().unwrap()));

        let players = vec![player("Alice", "AS AH"), player("Bob", "KD KC")];
        let err = Simulator::new(players, cards("2C 2C")).unwrap_err();
        assert_eq!(err, SimError::DuplicateCard("2C".parse().unwrap()));
    }

    #[test]
    fn invalid_inputs() {
        let players = vec![player("Alice", "AS AH"), player("Bob", "KD KC")];
        let err = Simulator::new(players, cards("2C 3C 4C 5C 6C 7C")).unwrap_err();
        assert_eq!(err, SimError::InvalidBoardSize(6));

        assert_eq!(
            Simulator::new(vec![], vec![]).unwrap_err(),
            SimError::NoPlayers
        );

        let sim = heads_up("AS AH", "KD KC", "");
        assert_eq!(
            sim.simulate(&config(0, 1, 1)).unwrap_err(),
            SimError::InvalidTrialCount
        );
    }

    #[test]
    fn working_deck() {
        let sim = heads_up("AS AH", "KD KC", "2C 3C 4C");
        assert_eq!(sim.deck().count(), Deck::SIZE - 7);
        for c in cards("AS AH KD KC 2C 3C 4C") {
            assert!(!sim.deck().contains(c));
        }
    }

    #[test]
    fn complete_board_is_deterministic() {
        let sim = heads_up("AS KS", "2H 3H", "QS JS TS 9H 8H");

        let o1 = sim.simulate(&config(1, 1, 1)).unwrap();
        let o2 = sim.simulate(&config(1_000, 4, 2)).unwrap();

        assert_eq!(o1.trials, 1);
        assert_eq!(o2.trials, 1_000);

        for o in [&o1, &o2] {
            let alice = o.player("Alice").unwrap();
            assert_eq!(alice.win_percentage, 100.0);
            assert_eq!(alice.showdown.unwrap().category, HandCategory::RoyalFlush);
            assert_eq!(alice.showdown.unwrap().category.name(), "Royal Flush");

            let bob = o.player("Bob").unwrap();
            assert_eq!(bob.win_percentage, 0.0);
            assert_eq!(bob.showdown.unwrap().category, HandCategory::Straight);

            assert_eq!(o.tie_percentage, 0.0);
        }
    }

    #[test]
    fn board_tie() {
        // Everybody plays the royal flush on the board, a 3-way tie counts as
        // a single tie.
        let players = vec![
            player("Alice", "2C 3C"),
            player("Bob", "4D 5D"),
            player("Carol", "7H 8H"),
        ];
        let sim = Simulator::new(players, cards("AS KS QS JS TS")).unwrap();
        let o = sim.simulate(&config(10, 1, 1)).unwrap();

        assert_eq!(o.tie_percentage, 100.0);
        assert!(o.players.iter().all(|p| p.win_percentage == 0.0));

        let tally = sim.run(10, &mut SmallRng::seed_from_u64(1)).unwrap();
        assert_eq!(tally.ties(), 10);
        assert_eq!(tally.wins(), &[0, 0, 0]);
    }

    #[test]
    fn no_showdown_with_incomplete_board() {
        let sim = heads_up("AS AH", "KD KC", "2C 7D 9H");
        let o = sim.simulate(&config(100, 1, 3)).unwrap();
        assert!(o.players.iter().all(|p| p.showdown.is_none()));
    }

    #[test]
    fn aces_against_kings() {
        let sim = heads_up("AS AH", "KD KC", "");
        let o = sim.simulate(&config(20_000, 4, 42)).unwrap();

        assert_eq!(o.trials, 20_000);
        let alice = o.player("Alice").unwrap().win_percentage;
        let bob = o.player("Bob").unwrap().win_percentage;
        assert!((78.0..86.0).contains(&alice), "alice {alice}");
        assert!((14.0..22.0).contains(&bob), "bob {bob}");
        assert!(o.tie_percentage < 2.0);
        assert!((o.total_percentage() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percentages_sum_to_100() {
        let players = vec![
            player("Alice", "AS KD"),
            player("Bob", "7H 7C"),
            player("Carol", "JS TS"),
        ];
        let sim = Simulator::new(players, cards("9S 8D 2H")).unwrap();

        for tasks in [1, 3] {
            let o = sim.simulate(&config(5_001, tasks, 11)).unwrap();
            assert_eq!(o.trials, 5_001);
            assert!((o.total_percentage() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let sim = heads_up("AS KD", "7H 7C", "");

        let o1 = sim.simulate(&config(2_000, 2, 7)).unwrap();
        let o2 = sim.simulate(&config(2_000, 2, 7)).unwrap();
        assert_eq!(o1, o2);

        let t1 = sim.run(500, &mut SmallRng::seed_from_u64(9)).unwrap();
        let t2 = sim.run(500, &mut SmallRng::seed_from_u64(9)).unwrap();
        assert_eq!(t1, t2);
        assert_eq!(t1.trials(), 500);
    }

    #[test]
    fn enumerate_from_turn() {
        // Bob only wins with one of the two kings left.
        let sim = heads_up("AH AD", "KH KD", "2C 7S 9D QC");
        let o = sim.enumerate().unwrap();

        assert_eq!(o.trials, 44);
        assert_eq!(o.player("Bob").unwrap().win_percentage, 2.0 * 100.0 / 44.0);
        assert_eq!(o.player("Alice").unwrap().win_percentage, 42.0 * 100.0 / 44.0);
        assert_eq!(o.tie_percentage, 0.0);
    }

    #[test]
    fn enumerate_counts() {
        let sim = heads_up("AH AD", "KH KD", "2C 7S 9D");
        assert_eq!(sim.enumerate().unwrap().trials, 990);

        let sim = heads_up("AS KS", "2H 3H", "QS JS TS 9H 8H");
        let o = sim.enumerate().unwrap();
        assert_eq!(o.trials, 1);
        assert_eq!(o.player("Alice").unwrap().win_percentage, 100.0);
    }

    #[test]
    fn outcome_serde() {
        let sim = heads_up("AS KS", "2H 3H", "QS JS TS 9H 8H");
        let o = sim.simulate(&config(10, 1, 1)).unwrap();

        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["trials"], 10);
        assert_eq!(json["players"][0]["showdown"]["category"], "Royal Flush");
        assert_eq!(json["players"][1]["showdown"]["category"], "Straight");

        let back: Outcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, o);
    }
}
