// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown equity simulator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::{fs, io::Read};

mod report;
use report::SimulationResponse;

mod request;
use request::{PlayerRequest, SimulationRequest};

#[derive(Debug, Parser)]
struct Cli {
    /// A player and its hole cards, for example Alice:AS,KD.
    #[clap(long = "player", short, value_name = "NAME:C1,C2")]
    players: Vec<String>,
    /// The community cards, for example 2C,7D,TS.
    #[clap(long, short, value_delimiter = ',')]
    board: Vec<String>,
    /// Number of trials.
    #[clap(long, short, default_value_t = 100_000,
        value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    trials: u32,
    /// Number of simulation threads.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for reproducible simulations.
    #[clap(long)]
    seed: Option<u64>,
    /// Enumerate every board completion instead of sampling.
    #[clap(long)]
    exact: bool,
    /// Read a JSON request from a file, use - for stdin.
    #[clap(long, short, value_name = "FILE",
        conflicts_with_all = ["players", "board", "trials"])]
    request: Option<String>,
    /// Print the response as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let req = match &cli.request {
        Some(path) => read_request(path)?,
        None => SimulationRequest {
            players: cli
                .players
                .iter()
                .map(|p| PlayerRequest::parse(p))
                .collect::<Result<Vec<_>, _>>()?,
            community_cards: cli.board.clone(),
            number_of_simulations: i64::from(cli.trials),
        },
    };

    let sim = req.simulator()?;
    let outcome = if cli.exact {
        sim.enumerate()?
    } else {
        sim.simulate(&req.config(usize::from(cli.tasks), cli.seed))?
    };

    let response = SimulationResponse::from(outcome);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{response}");
    }

    Ok(())
}

fn read_request(path: &str) -> Result<SimulationRequest> {
    let json = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Cannot read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Cannot read request {path}"))?
    };

    serde_json::from_str(&json).with_context(|| format!("Invalid request {path}"))
}
