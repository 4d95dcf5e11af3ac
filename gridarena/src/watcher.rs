//! # Scenario Hot-Reloading
//!
//! Watches the scenario file passed on the command line. A write to it raises
//! a shared flag; the runner polls the flag between steps and rebuilds the
//! environment from the new file.
//!
//! The parent directory is watched rather than the file itself so that saves
//! which replace the file are still seen.

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

/// Start watching `scenario`. Changes set `reload` to `true`.
///
/// The caller must keep the returned watcher alive; dropping it stops the
/// notifications.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or the scenario's
/// directory cannot be watched.
pub fn start(scenario: &Path, reload: Arc<AtomicBool>) -> Result<RecommendedWatcher> {
    let target = scenario
        .canonicalize()
        .with_context(|| format!("scenario file {} not found", scenario.display()))?;
    let directory = target
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let watched = target.clone();
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        match result {
            Ok(event) => {
                if is_relevant(&event, &watched) {
                    info!("scenario file {} changed, reloading at next step", watched.display());
                    reload.store(true, Ordering::Release);
                }
            }
            Err(e) => error!("file watcher error: {e:?}"),
        }
    })
    .context("failed to create file watcher")?;

    watcher
        .watch(&directory, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", directory.display()))?;

    info!("watching {} for changes", target.display());
    Ok(watcher)
}

fn is_relevant(event: &Event, target: &Path) -> bool {
    if !event.kind.is_modify() && !event.kind.is_create() {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| path == target || path.file_name() == target.file_name())
}
