//! Repetition pattern compiler and verifier.
//!
//! A pattern is a run of symbols, each optionally followed by a modifier.
//! Tokens are adjacent; there is no separator syntax.
//!
//! # Pattern syntax
//!
//! | Token  | Meaning                                              |
//! |--------|------------------------------------------------------|
//! | `a`    | Exactly one `a`                                      |
//! | `a*`   | Zero or more `a`                                     |
//! | `a+`   | One or more `a`                                      |
//! | `a^n`  | Any run of `a`, counted onto the count store         |
//! | `b^n`  | The last `^n` token: as many `b` as were counted     |
//!
//! Only the last `^n` token of a pattern checks counts; every earlier one
//! adds to the count. A pattern with a single `^n` token therefore has
//! nothing counted before its mirror, and the mirror consumes nothing.

pub mod compiler;
pub mod count_store;
pub mod instruction;
pub mod verifier;

pub use compiler::{SeparatorPolicy, compile, compile_with, strip_separators};
pub use count_store::CountStore;
pub use instruction::{Instruction, InstructionKind, InstructionSequence};
pub use verifier::{Report, check, verify, verify_with};
