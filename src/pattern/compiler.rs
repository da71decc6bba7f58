//! Single-pass compiler from pattern text to an [`InstructionSequence`].
//!
//! The compiler accepts any text. A modifier that cannot attach to the
//! preceding symbol (a lone `^`, a trailing `^` without `n`) simply becomes
//! a [`InstructionKind::Fixed`] symbol of its own.

use std::str::Chars;

use phf::{Map, phf_map};

use super::instruction::{Instruction, InstructionKind, InstructionSequence};

/// Two-character suffix marking an exact repetition.
const EXACT_COUNT_SUFFIX: &str = "^n";

/// Single-character suffixes and the kinds they select.
const SUFFIX_MODIFIERS: Map<char, InstructionKind> = phf_map! {
    '*' => InstructionKind::FreeRepeat,
    '+' => InstructionKind::OneOrMore,
};

/// How whitespace in pattern text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorPolicy {
    /// Whitespace characters are symbols like any other.
    #[default]
    Literal,
    /// Whitespace is removed before compiling, so `a^n c b+` reads as `a^ncb+`.
    Strip,
}

/// Compile `pattern` with every character, whitespace included, as a symbol.
pub fn compile(pattern: &str) -> InstructionSequence {
    compile_with(pattern, SeparatorPolicy::Literal)
}

/// Compile `pattern` after applying the separator policy.
pub fn compile_with(pattern: &str, policy: SeparatorPolicy) -> InstructionSequence {
    let stripped;
    let text = match policy {
        SeparatorPolicy::Literal => pattern,
        SeparatorPolicy::Strip => {
            stripped = strip_separators(pattern);
            stripped.as_str()
        }
    };

    let mut instructions = Compiler {
        chars: text.chars(),
    }
    .compile_tokens();
    let mirror = rewrite_last_exact_count(&mut instructions);

    tracing::debug!(
        pattern = text,
        instructions = instructions.len(),
        ?mirror,
        "compiled pattern"
    );
    InstructionSequence::from_vec(instructions)
}

/// Remove every whitespace character from `pattern`.
pub fn strip_separators(pattern: &str) -> String {
    pattern.chars().filter(|c| !c.is_whitespace()).collect()
}

struct Compiler<'a> {
    chars: Chars<'a>,
}

impl Compiler<'_> {
    fn compile_tokens(&mut self) -> Vec<Instruction> {
        let mut instructions = Vec::new();
        while let Some(symbol) = self.chars.next() {
            let kind = self.parse_modifier();
            instructions.push(Instruction::new(kind, symbol));
        }
        instructions
    }

    /// Consume the modifier following a symbol, if there is one.
    fn parse_modifier(&mut self) -> InstructionKind {
        let rest = self.chars.as_str();
        if let Some(tail) = rest.strip_prefix(EXACT_COUNT_SUFFIX) {
            self.chars = tail.chars();
            return InstructionKind::ExactCount;
        }
        match rest.chars().next().and_then(|c| SUFFIX_MODIFIERS.get(&c).copied()) {
            Some(kind) => {
                self.chars.next(); // consume modifier
                kind
            }
            None => InstructionKind::Fixed,
        }
    }
}

/// Turn the last `ExactCount` into the `MirrorCount`, returning its index.
///
/// Runs once over the finished sequence. A lone `ExactCount` is rewritten too.
fn rewrite_last_exact_count(instructions: &mut [Instruction]) -> Option<usize> {
    let (index, last) = instructions
        .iter_mut()
        .enumerate()
        .rev()
        .find(|(_, i)| i.kind == InstructionKind::ExactCount)?;
    last.kind = InstructionKind::MirrorCount;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use InstructionKind::*;
    use proptest::prelude::*;

    fn kinds(pattern: &str) -> Vec<(InstructionKind, char)> {
        compile(pattern)
            .iter()
            .map(|i| (i.kind, i.symbol))
            .collect()
    }

    // --- Single tokens ---

    #[test]
    fn fixed_symbol() {
        assert_eq!(kinds("a"), vec![(Fixed, 'a')]);
    }

    #[test]
    fn free_repeat() {
        assert_eq!(kinds("a*"), vec![(FreeRepeat, 'a')]);
    }

    #[test]
    fn one_or_more() {
        assert_eq!(kinds("a+"), vec![(OneOrMore, 'a')]);
    }

    #[test]
    fn lone_exact_count_becomes_mirror() {
        assert_eq!(kinds("a^n"), vec![(MirrorCount, 'a')]);
    }

    #[test]
    fn empty_pattern() {
        assert!(compile("").is_empty());
    }

    // --- Mirror rewrite ---

    #[test]
    fn last_exact_count_is_mirrored() {
        assert_eq!(
            kinds("a^ncb^n"),
            vec![(ExactCount, 'a'), (Fixed, 'c'), (MirrorCount, 'b')]
        );
    }

    #[test]
    fn only_one_mirror_among_many_exact_counts() {
        assert_eq!(
            kinds("a^nb^nc^n"),
            vec![(ExactCount, 'a'), (ExactCount, 'b'), (MirrorCount, 'c')]
        );
    }

    #[test]
    fn mirror_ignores_later_non_exact_tokens() {
        let seq = compile("a^nb^nc+d");
        assert_eq!(seq.mirror_index(), Some(1));
        assert_eq!(
            kinds("a^nb^nc+d"),
            vec![(ExactCount, 'a'), (MirrorCount, 'b'), (OneOrMore, 'c'), (Fixed, 'd')]
        );
    }

    #[test]
    fn no_exact_count_means_no_mirror() {
        let seq = compile("xyz*");
        assert_eq!(seq.mirror_index(), None);
        assert_eq!(
            kinds("xyz*"),
            vec![(Fixed, 'x'), (Fixed, 'y'), (FreeRepeat, 'z')]
        );
    }

    // --- Malformed modifiers ---

    #[test]
    fn trailing_caret_is_fixed() {
        assert_eq!(kinds("a^"), vec![(Fixed, 'a'), (Fixed, '^')]);
    }

    #[test]
    fn caret_without_n_is_fixed() {
        assert_eq!(
            kinds("a^m"),
            vec![(Fixed, 'a'), (Fixed, '^'), (Fixed, 'm')]
        );
    }

    #[test]
    fn leading_caret_n_is_two_fixed_symbols() {
        assert_eq!(kinds("^n"), vec![(Fixed, '^'), (Fixed, 'n')]);
    }

    #[test]
    fn modifier_characters_can_be_symbols() {
        assert_eq!(kinds("**"), vec![(FreeRepeat, '*')]);
        assert_eq!(kinds("+++"), vec![(OneOrMore, '+'), (Fixed, '+')]);
        assert_eq!(kinds("^^n"), vec![(MirrorCount, '^')]);
    }

    #[test]
    fn multibyte_symbols() {
        assert_eq!(
            kinds("é^nß+"),
            vec![(MirrorCount, 'é'), (OneOrMore, 'ß')]
        );
    }

    // --- Separators ---

    #[test]
    fn literal_policy_keeps_spaces_as_symbols() {
        assert_eq!(
            kinds("a^n c"),
            vec![(MirrorCount, 'a'), (Fixed, ' '), (Fixed, 'c')]
        );
    }

    #[test]
    fn strip_policy_removes_whitespace() {
        let seq = compile_with("a^n c\tb^n", SeparatorPolicy::Strip);
        assert_eq!(seq, compile("a^ncb^n"));
        assert_eq!(seq.to_pattern(), "a^ncb^n");
    }

    #[test]
    fn space_before_modifier_detaches_it() {
        // "a *" with literal spaces: the space takes the modifier.
        assert_eq!(kinds("a *"), vec![(Fixed, 'a'), (FreeRepeat, ' ')]);
    }

    #[test]
    fn strip_separators_handles_all_whitespace() {
        assert_eq!(strip_separators(" x\ty\nz* "), "xyz*");
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn compiling_is_deterministic(pattern in "[abc^n*+ ]{0,24}") {
            prop_assert_eq!(compile(&pattern), compile(&pattern));
        }

        #[test]
        fn render_then_recompile_is_stable(pattern in "[abc^n*+ ]{0,24}") {
            let seq = compile(&pattern);
            prop_assert_eq!(compile(&seq.to_pattern()), seq);
        }

        #[test]
        fn at_most_one_mirror(pattern in "[ab^n*+]{0,24}") {
            let seq = compile(&pattern);
            let mirrors = seq.iter().filter(|i| i.kind == MirrorCount).count();
            let exacts = seq.iter().filter(|i| i.kind == ExactCount).count();
            prop_assert!(mirrors <= 1);
            if let Some(m) = seq.mirror_index() {
                prop_assert!(seq.iter().skip(m + 1).all(|i| i.kind != ExactCount));
            } else {
                prop_assert_eq!(exacts, 0);
            }
        }
    }
}
