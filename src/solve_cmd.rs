//! Solve command: expand wildcard date patterns.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use baktun_longcount::{expand_full_date, expand_long_count, FullDate, LongCount};
use baktun_round::{expand_calendar_round, CalendarRound};

use crate::cli::SolveArgs;

/// Report for a pattern expansion.
#[derive(Debug, Serialize)]
struct SolveReport {
    pattern: String,
    count: usize,
    matches: Vec<String>,
}

/// The solver a pattern's shape selects.
#[derive(Debug, PartialEq, Eq)]
enum PatternKind {
    LongCount,
    FullDate,
    Round,
}

/// Classifies a pattern by shape: a period-separated token is a Long
/// Count (a full date when followed by more words), a lone numeric
/// token is a one-digit Long Count, and anything else is a calendar
/// round.
fn classify(head: &str, tail: &str) -> PatternKind {
    if head.contains('.') {
        if tail.is_empty() {
            PatternKind::LongCount
        } else {
            PatternKind::FullDate
        }
    } else if tail.is_empty() && !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) {
        PatternKind::LongCount
    } else {
        PatternKind::Round
    }
}

/// Run the pattern expansion.
pub fn run(args: SolveArgs) -> Result<()> {
    let _cmd = info_span!("solve").entered();

    let pattern = args.pattern.trim();
    let (head, tail) = match pattern.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (pattern, ""),
    };

    let matches: Vec<String> = match classify(head, tail) {
        PatternKind::LongCount => expand_long_count(&parse_long_count(head)?)
            .iter()
            .map(ToString::to_string)
            .collect(),
        PatternKind::FullDate => {
            let full = FullDate::new(parse_long_count(head)?, parse_round(tail)?);
            expand_full_date(&full)
                .context("failed to expand full date pattern")?
                .iter()
                .map(ToString::to_string)
                .collect()
        }
        PatternKind::Round => expand_calendar_round(parse_round(pattern)?)
            .iter()
            .map(ToString::to_string)
            .collect(),
    };
    info!(pattern, count = matches.len(), "expanded pattern");

    let report = SolveReport {
        pattern: pattern.to_string(),
        count: matches.len(),
        matches,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} match(es) for {:?}", report.count, report.pattern);
        for m in &report.matches {
            println!("{m}");
        }
    }

    Ok(())
}

fn parse_long_count(s: &str) -> Result<LongCount> {
    s.parse()
        .with_context(|| format!("failed to parse long count pattern: {s:?}"))
}

fn parse_round(s: &str) -> Result<CalendarRound> {
    s.parse()
        .with_context(|| format!("failed to parse calendar round pattern: {s:?}"))
}
