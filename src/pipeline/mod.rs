//! Pipeline components: pool and channels, feeder, workers, first-error handling.

pub mod context;
pub mod error_handler;
pub mod feeder;
pub mod orchestrator;
pub mod worker;

pub use context::{PipelineChannels, PipelineState, WorkerPool, create_pipeline_channels};
pub use error_handler::{record_first_error, take_first_error};
pub use feeder::{run_feeder_loop, spawn_feeder_thread};
pub use orchestrator::{PipelineHandles, run_pipeline, shutdown_pipeline_handles};
pub use worker::spawn_workers;
