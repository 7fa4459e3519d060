//! Run entry points: check preconditions, list the source, start the pipeline, stream results.

use crossbeam_channel::Receiver;
use log::debug;
use std::thread::JoinHandle;

use crate::engine::operation::operation_for;
use crate::engine::tools::{ensure_dir_exists, list_regular_files};
use crate::pipeline::{
    PipelineHandles, PipelineState, WorkerPool, run_pipeline, shutdown_pipeline_handles,
    take_first_error,
};
use crate::utils::config::MAX_WORKERS;
use crate::{FileResult, Mode, RunOpts, RunSummary};

/// Lazy, unordered stream of results for one run.
///
/// Iterate to receive results in completion order; iteration ends when every worker has
/// returned. Then call [`finish`](Self::finish) to join the threads and learn whether the run
/// succeeded. Dropping the stream early cancels the remaining work.
pub struct ResultStream {
    result_rx: Receiver<FileResult>,
    feeder_handle: Option<JoinHandle<usize>>,
    worker_handles: Vec<JoinHandle<()>>,
    state: PipelineState,
    produced: usize,
    bytes_copied: u64,
}

impl ResultStream {
    fn new(handles: PipelineHandles) -> Self {
        Self {
            result_rx: handles.result_rx,
            feeder_handle: Some(handles.feeder_handle),
            worker_handles: handles.worker_handles,
            state: handles.state,
            produced: 0,
            bytes_copied: 0,
        }
    }

    /// Filenames handed to workers so far.
    pub fn dispatched(&self) -> usize {
        self.state.dispatched()
    }

    /// Drain anything not yet received (discarded), join all threads, and return the first
    /// error of the run or its totals.
    pub fn finish(mut self) -> crate::Result<RunSummary> {
        while self.result_rx.recv().is_ok() {}

        let joined = match self.feeder_handle.take() {
            Some(feeder) => {
                shutdown_pipeline_handles(feeder, std::mem::take(&mut self.worker_handles))
            }
            None => Ok(self.state.dispatched()),
        };
        take_first_error(&self.state)?;
        let dispatched = joined?;

        let summary = RunSummary {
            dispatched,
            produced: self.produced,
            bytes_copied: self.bytes_copied,
        };
        debug!("run finished: {:?}", summary);
        Ok(summary)
    }
}

impl Iterator for ResultStream {
    type Item = FileResult;

    fn next(&mut self) -> Option<FileResult> {
        let result = self.result_rx.recv().ok()?;
        self.produced += 1;
        if let Some(bytes) = result.bytes() {
            self.bytes_copied += bytes;
        }
        Some(result)
    }
}

impl Drop for ResultStream {
    fn drop(&mut self) {
        if self.feeder_handle.is_some() {
            self.state.cancel();
        }
    }
}

/// Start a run. Preconditions are checked first: in copy mode a missing destination fails here,
/// before anything is listed or queued. A listing failure also fails here.
pub fn run(opts: &RunOpts) -> crate::Result<ResultStream> {
    if let Mode::CopyAndHash { dest } = &opts.mode {
        ensure_dir_exists(dest)?;
    }
    let pool = WorkerPool::new(opts.workers, MAX_WORKERS);
    let files = list_regular_files(&opts.src)?;
    debug!(
        "{}: {} regular files, digest {}",
        opts.src.display(),
        files.len(),
        opts.algo
    );
    let handles = run_pipeline(files, &pool, operation_for(opts));
    Ok(ResultStream::new(handles))
}

/// Run to completion and return every result (unordered), or the first error.
pub fn collect(opts: &RunOpts) -> crate::Result<Vec<FileResult>> {
    let mut stream = run(opts)?;
    let results: Vec<FileResult> = stream.by_ref().collect();
    stream.finish()?;
    Ok(results)
}
