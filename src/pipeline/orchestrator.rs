use crossbeam_channel::Receiver;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::FileResult;
use crate::engine::operation::FileOperation;
use crate::error::RunError;
use crate::pipeline;

/// Handles returned by [`run_pipeline`]: receive results from `result_rx`, then join.
pub struct PipelineHandles {
    pub result_rx: Receiver<FileResult>,
    pub feeder_handle: JoinHandle<usize>,
    pub worker_handles: Vec<JoinHandle<()>>,
    pub state: pipeline::PipelineState,
}

/// Start the feeder + worker pipeline over `files`.
/// Feeder → work queue (rendezvous) → `pool.size()` workers → result channel → caller.
pub fn run_pipeline(
    files: Vec<PathBuf>,
    pool: &pipeline::WorkerPool,
    op: Arc<dyn FileOperation>,
) -> PipelineHandles {
    debug!(
        "pipeline: {} files, {} workers, op {}",
        files.len(),
        pool.size(),
        op.label()
    );
    let channels = pipeline::create_pipeline_channels(pool);

    let worker_handles = pipeline::spawn_workers(
        pool,
        channels.work_rx,
        &channels.result_tx,
        op,
        &channels.state,
    );

    // Dropping the last sender closes the channel once every worker has returned.
    drop(channels.result_tx);

    let feeder_handle =
        pipeline::spawn_feeder_thread(files, channels.work_tx, channels.state.clone());

    PipelineHandles {
        result_rx: channels.result_rx,
        feeder_handle,
        worker_handles,
        state: channels.state,
    }
}

/// Join the feeder and every worker (after the result channel is drained). Returns the feeder's
/// dispatch count. A panic in any thread is reported after all threads are joined.
pub fn shutdown_pipeline_handles(
    feeder_handle: JoinHandle<usize>,
    worker_handles: Vec<JoinHandle<()>>,
) -> crate::Result<usize> {
    let mut panicked = None;
    let dispatched = match feeder_handle.join() {
        Ok(n) => n,
        Err(_) => {
            panicked = Some(RunError::WorkerPanicked("feeder"));
            0
        }
    };
    for h in worker_handles {
        if h.join().is_err() && panicked.is_none() {
            panicked = Some(RunError::WorkerPanicked("worker"));
        }
    }
    match panicked {
        Some(err) => Err(err),
        None => Ok(dispatched),
    }
}
