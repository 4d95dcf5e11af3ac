//! # Runner
//!
//! Drives one [`GridEnv`] from the command line. Actions come either from a
//! JSON script (one element per step, any accepted nesting level) or from the
//! action space, sampled with a seeded generator so a run can be replayed.
//! With `--watch` the scenario file is reloaded between steps whenever it
//! changes on disk.

use anyhow::{Context, Result};
use clap::Parser;
use env::{ActionInput, GridEnv, PerPlayer};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::watcher;

const PROGRESS_INTERVAL: u64 = 10;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gridarena", version, about = "Run a grid arena scenario")]
pub struct Args {
    /// Scenario JSON file.
    #[arg(long)]
    pub scenario: PathBuf,

    /// Number of random steps when no script is given.
    #[arg(long, default_value_t = 100)]
    pub steps: u64,

    /// Seed for random actions.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// JSON array of step inputs, e.g. `[1, 1, 3]` or `[[2,3,1],[1,4,3]]`.
    #[arg(long)]
    pub actions: Option<String>,

    /// Reload the scenario when the file changes.
    #[arg(long)]
    pub watch: bool,

    /// Record and print the action history.
    #[arg(long)]
    pub history: bool,
}

impl Args {
    /// Decode `--actions`, if given.
    ///
    /// # Errors
    ///
    /// Fails if the script is not a JSON array of step inputs.
    pub fn script(&self) -> Result<Option<Vec<ActionInput>>> {
        self.actions
            .as_deref()
            .map(|json| serde_json::from_str(json).context("--actions must be a JSON array of step inputs"))
            .transpose()
    }
}

/// Run the scenario described by `args`.
///
/// # Errors
///
/// Returns an error if the scenario cannot be loaded, the action script is
/// malformed, or a scripted action does not fit the action space.
pub fn run(args: &Args) -> Result<()> {
    tracing_subscriber::fmt::init();

    let script = args.script()?;
    let mut env = load(args)?;

    let reload = Arc::new(AtomicBool::new(false));
    let _scenario_watcher = if args.watch {
        match watcher::start(&args.scenario, Arc::clone(&reload)) {
            Ok(w) => Some(w),
            Err(e) => {
                error!("failed to start scenario watcher: {e:?}");
                None
            }
        }
    } else {
        None
    };

    let steps = script.as_ref().map_or(args.steps, |s| s.len() as u64);
    let mut rng = fastrand::Rng::with_seed(args.seed);
    let mut returns = vec![0_i64; env.player_count() as usize];
    info!(
        scenario = %env.config().name,
        steps,
        seed = args.seed,
        "starting run"
    );

    for i in 0..steps {
        if reload.swap(false, Ordering::AcqRel) {
            match load(args) {
                Ok(fresh) => {
                    env = fresh;
                    returns = vec![0; env.player_count() as usize];
                }
                Err(e) => error!("reload failed, keeping previous scenario: {e:#}"),
            }
        }

        let input = match &script {
            Some(script) => script[i as usize].clone(),
            None => env.descriptor().sample(&mut rng),
        };
        debug!(step = i, ?input, "submitting");
        let result = env
            .step(input)
            .with_context(|| format!("step {i} was rejected"))?;

        accumulate(&mut returns, &result.reward);
        if (i + 1) % PROGRESS_INTERVAL == 0 {
            info!(tick = result.info.tick, ?returns, "progress");
        }
        if result.done {
            info!(tick = result.info.tick, ?returns, "episode finished, resetting");
            env.reset()?;
            returns.iter_mut().for_each(|r| *r = 0);
        }
    }

    let snapshot = env.state()?;
    info!("final state: {}", serde_json::to_string(&snapshot)?);
    if args.history {
        for event in env.history() {
            info!("{}", serde_json::to_string(event)?);
        }
    }
    Ok(())
}

fn load(args: &Args) -> Result<GridEnv> {
    let mut env = GridEnv::from_path(&args.scenario)
        .with_context(|| format!("failed to load scenario {}", args.scenario.display()))?;
    env.enable_history(args.history);
    env.reset()?;
    Ok(env)
}

fn accumulate(returns: &mut [i64], rewards: &PerPlayer<i32>) {
    for (total, reward) in returns.iter_mut().zip(rewards.iter()) {
        *total += i64::from(*reward);
    }
}
