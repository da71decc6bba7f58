//! Accept/reject outcome of a verification run.

use std::fmt;

/// The result of verifying one input against a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(r) => Some(r),
        }
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The character at the cursor is not the expected symbol.
    Mismatch,
    /// The input ended while a symbol was still required.
    EndOfInput,
    /// Every instruction succeeded but characters remain.
    LeftoverInput,
}

/// Where and how verification stopped.
///
/// Positions are character indices into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectReason,
    pub position: usize,
    /// The character under the cursor, `None` at end of input.
    pub found: Option<char>,
    /// The symbol the failing instruction wanted. `None` for leftover input.
    pub expected: Option<char>,
}

impl Rejection {
    /// A required `expected` symbol was not at `position`.
    pub fn unmatched(position: usize, expected: char, found: Option<char>) -> Self {
        Self {
            reason: match found {
                Some(_) => RejectReason::Mismatch,
                None => RejectReason::EndOfInput,
            },
            position,
            found,
            expected: Some(expected),
        }
    }

    /// The instructions finished with `found` still unread at `position`.
    pub fn leftover(position: usize, found: char) -> Self {
        Self {
            reason: RejectReason::LeftoverInput,
            position,
            found: Some(found),
            expected: None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.reason, self.expected, self.found) {
            (RejectReason::LeftoverInput, _, Some(c)) => {
                write!(f, "unconsumed input at position {}: {c:?}", self.position)
            }
            (_, Some(e), Some(c)) => write!(
                f,
                "expected {e:?} at position {}, found {c:?}",
                self.position
            ),
            (_, Some(e), None) => write!(
                f,
                "expected {e:?} at position {}, found end of input",
                self.position
            ),
            _ => write!(f, "rejected at position {}", self.position),
        }
    }
}
