//! Checks strings against repetition patterns such as `a^n b^n`.
//!
//! A pattern is compiled once into an [`InstructionSequence`] and then
//! verified against any number of inputs. The last `^n` token of a pattern
//! must match as many symbols as the earlier `^n` tokens counted.
//!
//! # Example
//!
//! ```rust
//! use stackmatch::{RejectReason, SeparatorPolicy, Verdict, compile_with, verify};
//!
//! let pattern = compile_with("a^n c b^n", SeparatorPolicy::Strip);
//! assert_eq!(pattern.listing(), "a^n | c | b^n (mirror)");
//!
//! assert!(verify("aacbb", &pattern).is_accepted());
//!
//! // One `b` too many: the count store empties and the last `b` is left over.
//! match verify("aacbbb", &pattern) {
//!     Verdict::Rejected(r) => {
//!         assert_eq!(r.reason, RejectReason::LeftoverInput);
//!         assert_eq!(r.position, 5);
//!     }
//!     Verdict::Accepted => unreachable!(),
//! }
//! ```

pub mod pattern;
pub mod presenter;
pub mod trace;
mod verdict;

pub use pattern::{
    Instruction, InstructionKind, InstructionSequence, Report, SeparatorPolicy, check, compile,
    compile_with, verify, verify_with,
};
pub use trace::{ConsumeAction, LogSink, NoTrace, TraceEvent, TraceSink};
pub use verdict::{RejectReason, Rejection, Verdict};
