//! Instruction types produced by the pattern compiler.

use std::fmt;

use itertools::Itertools;

/// What an [`Instruction`] does with its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    /// `a` — exactly one occurrence.
    Fixed,
    /// `a^n` — any run of the symbol, each occurrence pushed on the count store.
    ExactCount,
    /// `a*` — zero or more.
    FreeRepeat,
    /// `a+` — one or more.
    OneOrMore,
    /// The last `a^n` of a pattern; pops the count store, one symbol per entry.
    MirrorCount,
}

impl InstructionKind {
    /// The pattern text that follows the symbol for this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Fixed => "",
            Self::ExactCount | Self::MirrorCount => "^n",
            Self::FreeRepeat => "*",
            Self::OneOrMore => "+",
        }
    }
}

/// One compiled step: a kind applied to a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub symbol: char,
}

impl Instruction {
    pub fn new(kind: InstructionKind, symbol: char) -> Self {
        Self { kind, symbol }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol, self.kind.suffix())
    }
}

/// An ordered, immutable list of instructions compiled from one pattern.
///
/// At most one instruction has kind [`InstructionKind::MirrorCount`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionSequence {
    instructions: Vec<Instruction>,
}

impl InstructionSequence {
    /// Only the compiler builds sequences, so the mirror invariant holds.
    pub(super) fn from_vec(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Index of the mirror instruction, if the pattern had any `a^n`.
    pub fn mirror_index(&self) -> Option<usize> {
        self.instructions
            .iter()
            .position(|i| i.kind == InstructionKind::MirrorCount)
    }

    /// Render back to pattern text.
    ///
    /// The mirror marker is lost: a mirror renders as plain `a^n`, and
    /// recompiling re-applies the rewrite to the last one.
    pub fn to_pattern(&self) -> String {
        self.instructions.iter().join("")
    }

    /// Human-readable listing, one token per instruction.
    pub fn listing(&self) -> String {
        self.instructions
            .iter()
            .map(|i| match i.kind {
                InstructionKind::MirrorCount => format!("{i} (mirror)"),
                _ => i.to_string(),
            })
            .join(" | ")
    }
}

impl<'a> IntoIterator for &'a InstructionSequence {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
