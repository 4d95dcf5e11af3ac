//! # Grid Arena Runner
//!
//! Entry point for the `gridarena` binary: loads a scenario file and steps it
//! with scripted or seeded random actions, logging progress as it goes.
//! `--watch` reloads the scenario whenever the file is saved.

mod app;
mod watcher;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = app::Args::parse();
    app::run(&args)
}
