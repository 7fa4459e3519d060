use log::debug;
use std::sync::PoisonError;

use crate::error::RunError;

use super::context::PipelineState;

/// Keep `err` if it is the first failure of the run, then cancel the remaining work.
pub fn record_first_error(state: &PipelineState, err: RunError) {
    {
        let mut slot = state
            .first_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            None => {
                debug!("first error ({}): {}", err.kind(), err);
                *slot = Some(err);
            }
            Some(_) => debug!("suppressed later error: {}", err),
        }
    }
    state.cancel();
}

/// Return the recorded first error, if any. Call after joining the feeder and workers.
pub fn take_first_error(state: &PipelineState) -> crate::Result<()> {
    let first = state
        .first_error
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    match first {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_error_is_kept() {
        let state = PipelineState::default();
        record_first_error(&state, RunError::Config("first".into()));
        record_first_error(&state, RunError::Config("second".into()));
        assert!(state.is_cancelled());
        let err = take_first_error(&state).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: first");
        assert!(take_first_error(&state).is_ok());
    }

    #[test]
    fn no_error_is_ok() {
        let state = PipelineState::default();
        assert!(take_first_error(&state).is_ok());
        assert!(!state.is_cancelled());
    }
}
