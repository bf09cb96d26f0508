use std::any::type_name;

use crate::config::TraceConfig;
use crate::pipe::Pipe;

/// A [`Pipe`] that logs each step it runs.
///
/// Steps behave exactly as on `Pipe`: eager, one call per step, errors
/// passed through untouched. The only addition is a `tracing` event per step.
#[derive(Debug, Clone)]
pub struct TracedPipe<T> {
    value: T,
    config: TraceConfig,
    steps: usize,
}

impl<T> TracedPipe<T> {
    pub fn new(value: T, config: TraceConfig) -> Self {
        Self {
            value,
            config,
            steps: 0,
        }
    }

    pub fn then<U, F>(self, f: F) -> TracedPipe<U>
    where
        F: FnOnce(T) -> U,
    {
        let step = self.steps + 1;
        let output = f(self.value);
        log_step(
            &self.config,
            step,
            type_name::<T>(),
            StepOutcome::Ok(type_name::<U>()),
        );
        TracedPipe {
            value: output,
            config: self.config,
            steps: step,
        }
    }

    pub fn try_then<U, E, F>(self, f: F) -> Result<TracedPipe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let step = self.steps + 1;
        match f(self.value) {
            Ok(output) => {
                log_step(
                    &self.config,
                    step,
                    type_name::<T>(),
                    StepOutcome::Ok(type_name::<U>()),
                );
                Ok(TracedPipe {
                    value: output,
                    config: self.config,
                    steps: step,
                })
            }
            Err(e) => {
                log_step(
                    &self.config,
                    step,
                    type_name::<T>(),
                    StepOutcome::Failed(type_name::<E>()),
                );
                Err(e)
            }
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Number of steps run since the pipe was traced.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Drop the trace and continue as a plain pipe.
    pub fn into_pipe(self) -> Pipe<T> {
        Pipe::new(self.value)
    }
}

/// Type name produced by a step: its output, or its error.
enum StepOutcome {
    Ok(&'static str),
    Failed(&'static str),
}

fn log_step(config: &TraceConfig, step: usize, input: &'static str, outcome: StepOutcome) {
    match outcome {
        StepOutcome::Ok(output) => tracing::debug!(
            run_id = %config.run_id,
            label = config.label_or_default(),
            tags = ?config.tags,
            metadata = ?config.metadata,
            step,
            input,
            output,
            "pipe step"
        ),
        StepOutcome::Failed(error) => tracing::warn!(
            run_id = %config.run_id,
            label = config.label_or_default(),
            tags = ?config.tags,
            metadata = ?config.metadata,
            step,
            input,
            error,
            "pipe step failed"
        ),
    }
}
