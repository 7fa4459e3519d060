use crossbeam_channel::{Receiver, Sender};
use log::debug;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::FileResult;
use crate::engine::operation::FileOperation;
use crate::error::RunError;

use super::context::{PipelineState, WorkerPool};
use super::error_handler::record_first_error;

/// Single worker: take filenames from `work_rx`, apply `op`, send results on `result_tx`.
/// Exits when the queue is closed and drained, the run is cancelled, or the caller hung up.
/// A panicking operation is caught and fails the run like any other error.
fn worker_loop(
    id: usize,
    work_rx: Receiver<PathBuf>,
    result_tx: Sender<FileResult>,
    op: Arc<dyn FileOperation>,
    state: PipelineState,
) {
    let mut done = 0_usize;
    while let Ok(name) = work_rx.recv() {
        if state.is_cancelled() {
            break;
        }
        let applied = panic::catch_unwind(AssertUnwindSafe(|| op.apply(&name)));
        match applied {
            Ok(Ok(result)) => {
                if result_tx.send(result).is_err() {
                    break;
                }
                done += 1;
            }
            Ok(Err(err)) => {
                record_first_error(&state, err);
                break;
            }
            Err(_) => {
                record_first_error(&state, RunError::WorkerPanicked("worker"));
                break;
            }
        }
    }
    debug!("worker {}: {} finished {} files", id, op.label(), done);
}

/// Spawn `pool.size()` workers. Takes ownership of `work_rx` so the queue disconnects from the
/// feeder's side once every worker has exited. Caller must drop its `result_tx` after this so the
/// result channel closes when the last worker returns.
pub fn spawn_workers(
    pool: &WorkerPool,
    work_rx: Receiver<PathBuf>,
    result_tx: &Sender<FileResult>,
    op: Arc<dyn FileOperation>,
    state: &PipelineState,
) -> Vec<JoinHandle<()>> {
    (1..=pool.size())
        .map(|id| {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            let op = Arc::clone(&op);
            let state = state.clone();
            thread::spawn(move || worker_loop(id, work_rx, result_tx, op, state))
        })
        .collect()
}
