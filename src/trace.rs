//! Trace events emitted while verifying an input.
//!
//! Provides a `TraceSink` trait and these implementations:
//! - `NoTrace` discards everything
//! - `Vec<TraceEvent>` collects events in order
//! - `LogSink` forwards events to `tracing` at TRACE level
//! - `(A, B)` forwards each event to both sinks
//!
//! Events never influence the verdict.

use crate::pattern::Instruction;
use crate::verdict::Rejection;

/// What happened to a consumed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeAction {
    /// Matched and skipped.
    Read,
    /// Matched and pushed on the count store.
    Push,
    /// Matched against, and popped from, the count store.
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Instruction number `step` starts executing.
    Begin { step: usize, instruction: Instruction },
    /// One input character was consumed.
    Consume {
        position: usize,
        symbol: char,
        action: ConsumeAction,
    },
    /// Verification stopped early or found leftover input.
    Reject(Rejection),
    /// Always the last event of a run.
    Finish { accepted: bool },
}

/// Receiver for trace events.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// Sink that writes each event to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, event: TraceEvent) {
        tracing::trace!(?event, "verify");
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for (A, B) {
    fn record(&mut self, event: TraceEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}
