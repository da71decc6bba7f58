//! Text rendering of instruction listings, trace events and verdicts.

use crossterm::style::Stylize;

use crate::pattern::{Instruction, InstructionKind, InstructionSequence};
use crate::trace::{ConsumeAction, TraceEvent};
use crate::verdict::Verdict;

pub fn render_listing(instructions: &InstructionSequence) -> String {
    format!("Interpreted instructions: {}", instructions.listing())
}

/// One line of trace output for `event`.
pub fn render_event(event: &TraceEvent) -> String {
    match event {
        TraceEvent::Begin { step, instruction } => {
            format!("[state {step}] expecting {}", expectation(instruction))
        }
        TraceEvent::Consume { symbol, action, .. } => match action {
            ConsumeAction::Read => format!("  reading: {symbol}"),
            ConsumeAction::Push => format!("  pushing: {symbol}"),
            ConsumeAction::Pop => format!("  popping: {symbol}"),
        },
        TraceEvent::Reject(rejection) => match rejection.found {
            Some(c) => format!("  reading: {c} is incorrect! ({rejection})"),
            None => format!("  {rejection}"),
        },
        TraceEvent::Finish { accepted: true } => "input fully consumed (ACCEPTED)".to_string(),
        TraceEvent::Finish { accepted: false } => "input rejected".to_string(),
    }
}

fn expectation(instruction: &Instruction) -> String {
    match instruction.kind {
        InstructionKind::ExactCount => format!("{instruction} (counting)"),
        InstructionKind::MirrorCount => format!("{instruction} (equal counts)"),
        _ => instruction.to_string(),
    }
}

/// Verdict line for `input`, coloured when `colour` is set.
pub fn render_verdict(input: &str, verdict: &Verdict, colour: bool) -> String {
    let label = match (verdict.rejection(), colour) {
        (None, true) => "ACCEPTED".green().bold().to_string(),
        (None, false) => "ACCEPTED".to_string(),
        (Some(_), true) => "REJECTED".red().bold().to_string(),
        (Some(_), false) => "REJECTED".to_string(),
    };
    match verdict.rejection() {
        None => format!("{input:?}: {label}"),
        Some(rejection) => format!("{input:?}: {label} ({rejection})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{check, compile};
    use crate::verdict::Rejection;

    #[test]
    fn listing_line() {
        assert_eq!(
            render_listing(&compile("a^ncb^n")),
            "Interpreted instructions: a^n | c | b^n (mirror)"
        );
    }

    #[test]
    fn traced_run_renders_in_order() {
        let report = check("ab", &compile("a^nb^n"), true);
        let lines: Vec<String> = report.trace.iter().map(render_event).collect();
        assert_eq!(
            lines,
            vec![
                "[state 0] expecting a^n (counting)",
                "  pushing: a",
                "[state 1] expecting b^n (equal counts)",
                "  popping: b",
                "input fully consumed (ACCEPTED)",
            ]
        );
    }

    #[test]
    fn rejection_lines() {
        let mismatch = TraceEvent::Reject(Rejection::unmatched(1, 'b', Some('c')));
        assert_eq!(
            render_event(&mismatch),
            "  reading: c is incorrect! (expected 'b' at position 1, found 'c')"
        );
        let end = TraceEvent::Reject(Rejection::unmatched(2, 'b', None));
        assert_eq!(
            render_event(&end),
            "  expected 'b' at position 2, found end of input"
        );
        assert_eq!(
            render_event(&TraceEvent::Finish { accepted: false }),
            "input rejected"
        );
    }

    #[test]
    fn plain_verdicts() {
        assert_eq!(
            render_verdict("ab", &Verdict::Accepted, false),
            "\"ab\": ACCEPTED"
        );
        assert_eq!(
            render_verdict("abb", &Verdict::Rejected(Rejection::leftover(2, 'b')), false),
            "\"abb\": REJECTED (unconsumed input at position 2: 'b')"
        );
    }

    #[test]
    fn coloured_verdict_keeps_label() {
        let line = render_verdict("", &Verdict::Accepted, true);
        assert!(line.starts_with("\"\": "));
        assert!(line.contains("ACCEPTED"));
    }
}
