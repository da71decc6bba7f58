//! Verifier: run an [`InstructionSequence`] against an input string.
//!
//! All positions are **character** (not byte) indices into the input.
//! Every repetition is greedy and nothing backtracks, so the cursor only
//! moves forward and each character is looked at a bounded number of times.

use crate::trace::{ConsumeAction, NoTrace, TraceEvent, TraceSink};
use crate::verdict::{Rejection, Verdict};

use super::count_store::CountStore;
use super::instruction::{Instruction, InstructionKind, InstructionSequence};

/// Verdict plus the trace that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub verdict: Verdict,
    /// Empty when tracing was disabled.
    pub trace: Vec<TraceEvent>,
}

// ─── Public API ─────────────────────────────────────────────────────────────

/// Verify `input` without tracing.
pub fn verify(input: &str, instructions: &InstructionSequence) -> Verdict {
    verify_with(input, instructions, &mut NoTrace)
}

/// Verify `input`, collecting trace events when `trace_enabled` is set.
pub fn check(input: &str, instructions: &InstructionSequence, trace_enabled: bool) -> Report {
    let mut trace = Vec::new();
    let verdict = if trace_enabled {
        verify_with(input, instructions, &mut trace)
    } else {
        verify(input, instructions)
    };
    Report { verdict, trace }
}

/// Verify `input`, streaming trace events into `sink`.
pub fn verify_with(
    input: &str,
    instructions: &InstructionSequence,
    sink: &mut dyn TraceSink,
) -> Verdict {
    let mut run = Run {
        input: input.chars().collect(),
        pos: 0,
        store: CountStore::new(),
        sink,
    };
    let verdict = run.execute(instructions);
    tracing::debug!(
        accepted = verdict.is_accepted(),
        consumed = run.pos,
        len = run.input.len(),
        uncounted = run.store.depth(),
        "verified input"
    );
    verdict
}

// ─── Execution ──────────────────────────────────────────────────────────────

/// State of one verification call. Nothing here outlives the call.
struct Run<'s> {
    input: Vec<char>,
    pos: usize,
    store: CountStore,
    sink: &'s mut dyn TraceSink,
}

impl Run<'_> {
    fn execute(&mut self, instructions: &InstructionSequence) -> Verdict {
        for (step, instruction) in instructions.iter().enumerate() {
            self.sink.record(TraceEvent::Begin {
                step,
                instruction: *instruction,
            });
            if let Err(rejection) = self.step(instruction) {
                return self.finish(Verdict::Rejected(rejection));
            }
        }
        let verdict = match self.peek() {
            None => Verdict::Accepted,
            Some(found) => Verdict::Rejected(Rejection::leftover(self.pos, found)),
        };
        self.finish(verdict)
    }

    fn step(&mut self, instruction: &Instruction) -> Result<(), Rejection> {
        let symbol = instruction.symbol;
        match instruction.kind {
            InstructionKind::Fixed => self.expect(symbol, ConsumeAction::Read),
            InstructionKind::FreeRepeat => {
                self.consume_run(symbol, ConsumeAction::Read);
                Ok(())
            }
            InstructionKind::OneOrMore => {
                self.expect(symbol, ConsumeAction::Read)?;
                self.consume_run(symbol, ConsumeAction::Read);
                Ok(())
            }
            InstructionKind::ExactCount => {
                self.consume_run(symbol, ConsumeAction::Push);
                Ok(())
            }
            InstructionKind::MirrorCount => {
                while !self.store.is_empty() {
                    self.expect(symbol, ConsumeAction::Pop)?;
                }
                Ok(())
            }
        }
    }

    fn finish(&mut self, verdict: Verdict) -> Verdict {
        if let Verdict::Rejected(rejection) = verdict {
            self.sink.record(TraceEvent::Reject(rejection));
        }
        self.sink.record(TraceEvent::Finish {
            accepted: verdict.is_accepted(),
        });
        verdict
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Consume exactly one `symbol` or reject.
    fn expect(&mut self, symbol: char, action: ConsumeAction) -> Result<(), Rejection> {
        match self.peek() {
            Some(c) if c == symbol => {
                self.advance(symbol, action);
                Ok(())
            }
            found => Err(Rejection::unmatched(self.pos, symbol, found)),
        }
    }

    /// Consume the maximal run of `symbol` at the cursor, possibly empty.
    fn consume_run(&mut self, symbol: char, action: ConsumeAction) {
        while self.peek() == Some(symbol) {
            self.advance(symbol, action);
        }
    }

    fn advance(&mut self, symbol: char, action: ConsumeAction) {
        match action {
            ConsumeAction::Read => {}
            ConsumeAction::Push => self.store.push(),
            ConsumeAction::Pop => {
                let popped = self.store.pop();
                debug_assert!(popped, "mirror pops only while the store is non-empty");
            }
        }
        self.sink.record(TraceEvent::Consume {
            position: self.pos,
            symbol,
            action,
        });
        self.pos += 1;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
