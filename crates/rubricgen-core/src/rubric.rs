//! Rubric assembly and markdown rendering

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::markdown::{extract_bullets, extract_section_lines};
use crate::rules::{Rule, SectionKind, Severity};

/// Score every rubric starts from
pub const BASE_SCORE: u32 = 100;

/// Timestamp layout used in the rubric header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FINGERPRINT_PREFIX: &str = "> Source SHA-256 (12): `";

/// One classified rule in extraction order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RubricRow {
    #[serde(flatten)]
    pub rule: Rule,
    pub penalty: u32,
    pub severity: Severity,
}

/// Ordered classified rules for one policy document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rubric {
    pub rows: Vec<RubricRow>,
}

impl Rubric {
    /// Extract and classify the rules of a policy document.
    ///
    /// Dependency Rules bullets come first, then Code Constraint bullets, each
    /// in document order. Duplicates are kept.
    pub fn from_markdown(markdown: &str) -> Self {
        let mut rows = Vec::new();
        for section in SectionKind::ALL {
            let bullets = extract_bullets(&extract_section_lines(markdown, section.title()));
            tracing::debug!(section = section.title(), bullets = bullets.len(), "extract_section");
            for text in bullets {
                let rule = Rule {
                    index: rows.len() + 1,
                    text,
                    section,
                };
                let classification = rule.classify();
                tracing::trace!(
                    index = rule.index,
                    penalty = classification.penalty,
                    severity = %classification.severity,
                    "classify_rule"
                );
                rows.push(RubricRow {
                    rule,
                    penalty: classification.penalty,
                    severity: classification.severity,
                });
            }
        }
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every listed penalty
    pub fn max_penalty(&self) -> u32 {
        self.rows.iter().map(|row| row.penalty).sum()
    }
}

/// Header values recorded for provenance
#[derive(Debug, Clone, Copy)]
pub struct Provenance<'a> {
    /// Absolute source path as displayed
    pub source: &'a str,
    /// Pre-formatted generation timestamp
    pub generated_at: &'a str,
    /// Short fingerprint of the source text
    pub fingerprint: &'a str,
}

/// Format a timestamp for the rubric header
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the rubric markdown.
///
/// The result ends with an empty line; callers append the final newline when writing.
pub fn render(rubric: &Rubric, provenance: Provenance<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut push = |line: &str| lines.push(line.to_string());

    push("# Architecture Clean Score Rubric");
    push("");
    push("> Auto-generated from `AGENTS.md`.");
    push(&format!("> Source: `{}`", provenance.source));
    push(&format!("> Generated: `{}`", provenance.generated_at));
    push(&format!("{}{}`", FINGERPRINT_PREFIX, provenance.fingerprint));
    push("");
    push("Use this rubric to produce a 100-point architecture cleanliness score.");
    push("");
    push("## Base Score");
    push("");
    push(&format!("Start from `{}`.", BASE_SCORE));
    push("");
    push("## Rule Penalties (Derived From AGENTS.md)");
    push("");
    if rubric.is_empty() {
        push("- No explicit bullet rules found in `Dependency Rules` or `Code Constraint`.");
    } else {
        for row in &rubric.rows {
            push(&format!(
                "{}. `-{}` ({}, {}): {}",
                row.rule.index, row.penalty, row.severity, row.rule.section, row.rule.text
            ));
        }
    }
    push("");
    push("## Severity Mapping");
    push("");
    push("- `High`: penalty `>= 15`");
    push("- `Medium`: penalty `8-14`");
    push("- `Low`: penalty `<= 7`");
    push("");
    push("## Score Bands");
    push("");
    push("- `90-100`: clean, constraints mostly enforced");
    push("- `75-89`: generally healthy, some important issues to fix");
    push("- `60-74`: noticeable architecture debt");
    push("- `<60`: architecture boundaries are weak or frequently violated");
    push("");
    push("## Reporting Requirements");
    push("");
    push("- Show each deduction with:");
    push("  - broken rule");
    push("  - file evidence");
    push("  - penalty points");
    push("- Show subtotal by severity.");
    push("- Show final formula:");
    push("  - `Final = max(0, 100 - total_penalty)`");
    push(&format!(
        "  - `Current rubric max theoretical penalty = {}`",
        rubric.max_penalty()
    ));
    push("");
    push("## Notes");
    push("");
    push("- Re-run generator whenever `AGENTS.md` changes.");
    push("- Keep only verified violations; do not deduct for assumptions.");
    push("");

    lines.join("\n")
}

/// Read the short fingerprint back out of a rendered rubric
pub fn parse_fingerprint(rendered: &str) -> Option<&str> {
    rendered
        .lines()
        .find_map(|line| line.trim().strip_prefix(FINGERPRINT_PREFIX))
        .and_then(|rest| rest.strip_suffix('`'))
}
