//! Feeder: hands each listed filename to the work queue, then closes it.

use crossbeam_channel::Sender;
use log::debug;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::thread::{self, JoinHandle};

use super::context::PipelineState;

/// Spawn the feeder thread. It owns `work_tx` and closes the queue by dropping it.
pub fn spawn_feeder_thread(
    files: Vec<PathBuf>,
    work_tx: Sender<PathBuf>,
    state: PipelineState,
) -> JoinHandle<usize> {
    thread::spawn(move || run_feeder_loop(files, work_tx, &state))
}

/// Send every filename in listing order. Each send blocks until a worker takes the item.
/// Stops early once the run is cancelled or every worker has gone. Returns the count handed off.
pub fn run_feeder_loop(
    files: Vec<PathBuf>,
    work_tx: Sender<PathBuf>,
    state: &PipelineState,
) -> usize {
    let total = files.len();
    let mut count = 0_usize;
    for name in files {
        if state.is_cancelled() {
            break;
        }
        if work_tx.send(name).is_err() {
            break;
        }
        state.dispatched.fetch_add(1, Ordering::AcqRel);
        count += 1;
    }
    drop(work_tx);
    debug!("feeder: queued {} of {} files, queue closed", count, total);
    count
}
