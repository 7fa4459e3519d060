//! Pipeline context: pool sizing, channels, and the state shared by the feeder and workers.

use crossbeam_channel::{Receiver, Sender, bounded};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::FileResult;
use crate::error::RunError;

/// Fixed-size worker pool: `requested` clamped into `1..=max_workers`.
/// The cap is passed in by the caller rather than read from global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerPool {
    size: usize,
}

impl WorkerPool {
    pub fn new(requested: usize, max_workers: usize) -> Self {
        let max_workers = max_workers.max(1);
        if requested > max_workers {
            warn!("{} workers specified; max is {}", requested, max_workers);
        }
        let size = requested.clamp(1, max_workers);
        info!("number of workers: {}", size);
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// State shared by the feeder, the workers, and the result stream.
/// `first_error` keeps only the first failure; `cancelled` tells everyone else to stop.
#[derive(Clone, Default)]
pub struct PipelineState {
    pub first_error: Arc<Mutex<Option<RunError>>>,
    pub cancelled: Arc<AtomicBool>,
    pub dispatched: Arc<AtomicUsize>,
}

impl PipelineState {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Filenames the feeder has handed to a worker so far.
    pub fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::Acquire)
    }
}

/// Channels for one run. The feeder gets `work_tx`; workers get `work_rx` and `result_tx`;
/// the caller keeps `result_rx`.
pub struct PipelineChannels {
    pub work_tx: Sender<PathBuf>,
    pub work_rx: Receiver<PathBuf>,
    pub result_tx: Sender<FileResult>,
    pub result_rx: Receiver<FileResult>,
    pub state: PipelineState,
}

/// Work queue is a rendezvous channel (capacity 0): each send waits for a worker to take it.
/// Result channel holds one slot per worker.
pub fn create_pipeline_channels(pool: &WorkerPool) -> PipelineChannels {
    let (work_tx, work_rx) = bounded::<PathBuf>(0);
    let (result_tx, result_rx) = bounded::<FileResult>(pool.size());
    PipelineChannels {
        work_tx,
        work_rx,
        result_tx,
        result_rx,
        state: PipelineState::default(),
    }
}
