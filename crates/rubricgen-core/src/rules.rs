//! Rule model and keyword-based classification

use serde::Serialize;
use std::fmt;

/// Penalty for rules containing "must not"
pub const PENALTY_MUST_NOT: u32 = 20;
/// Penalty for rules containing "must"
pub const PENALTY_MUST: u32 = 15;
/// Penalty for other rules in the Dependency Rules section
pub const PENALTY_DEPENDENCY: u32 = 12;
/// Penalty for other rules in the Code Constraint section
pub const PENALTY_CODE_CONSTRAINT: u32 = 10;
/// Penalty for anything else
pub const PENALTY_FALLBACK: u32 = 8;

/// The recognized policy sections, in extraction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    #[serde(rename = "Dependency Rules")]
    DependencyRules,
    #[serde(rename = "Code Constraint")]
    CodeConstraint,
}

impl SectionKind {
    /// All sections, Dependency Rules first
    pub const ALL: [SectionKind; 2] = [SectionKind::DependencyRules, SectionKind::CodeConstraint];

    /// Heading title as written in the policy document
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::DependencyRules => "Dependency Rules",
            SectionKind::CodeConstraint => "Code Constraint",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Qualitative bucket derived from a penalty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Bucket a penalty: `>= 15` High, `8..=14` Medium, below that Low.
    ///
    /// The classifier never produces less than 8, so Low is currently unreachable
    /// through [`classify`].
    pub fn from_penalty(penalty: u32) -> Self {
        if penalty >= 15 {
            Severity::High
        } else if penalty >= 8 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bullet extracted from a recognized section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// 1-based position across both sections
    pub index: usize,
    pub text: String,
    pub section: SectionKind,
}

impl Rule {
    pub fn classify(&self) -> Classification {
        classify(&self.text, self.section.title())
    }
}

/// Derived penalty and severity for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub penalty: u32,
    pub severity: Severity,
}

/// Penalty for a rule; the first matching condition wins.
pub fn penalty_for_rule(rule: &str, section: &str) -> u32 {
    let text = rule.to_lowercase();
    let section_key = section.trim().to_lowercase();

    if text.contains("must not") {
        PENALTY_MUST_NOT
    } else if text.contains("must") {
        PENALTY_MUST
    } else if section_key == "dependency rules" {
        PENALTY_DEPENDENCY
    } else if section_key == "code constraint" {
        PENALTY_CODE_CONSTRAINT
    } else {
        PENALTY_FALLBACK
    }
}

/// Classify rule text originating from the named section
pub fn classify(rule: &str, section: &str) -> Classification {
    let penalty = penalty_for_rule(rule, section);
    Classification {
        penalty,
        severity: Severity::from_penalty(penalty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_not_beats_must() {
        assert_eq!(
            penalty_for_rule("must not ever, must be careful", "Code Constraint"),
            20
        );
        assert_eq!(penalty_for_rule("Must Not skip tests", "Dependency Rules"), 20);
    }

    #[test]
    fn test_must_is_case_insensitive_substring() {
        assert_eq!(penalty_for_rule("Functions MUST be small", "Code Constraint"), 15);
        // Substring match, not word match
        assert_eq!(penalty_for_rule("Mustard is allowed", "Dependency Rules"), 15);
    }

    #[test]
    fn test_section_fallbacks() {
        assert_eq!(penalty_for_rule("Prefer composition", "Dependency Rules"), 12);
        assert_eq!(penalty_for_rule("Prefer composition", "dependency rules"), 12);
        assert_eq!(penalty_for_rule("Prefer composition", "Code Constraint"), 10);
        assert_eq!(penalty_for_rule("Prefer composition", "Style"), 8);
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_penalty(15), Severity::High);
        assert_eq!(Severity::from_penalty(20), Severity::High);
        assert_eq!(Severity::from_penalty(14), Severity::Medium);
        assert_eq!(Severity::from_penalty(8), Severity::Medium);
        assert_eq!(Severity::from_penalty(7), Severity::Low);
        assert_eq!(Severity::from_penalty(0), Severity::Low);
    }

    #[test]
    fn test_classify_combines_penalty_and_severity() {
        assert_eq!(
            classify("Should document public APIs", "Dependency Rules"),
            Classification {
                penalty: 12,
                severity: Severity::Medium
            }
        );
        assert_eq!(classify("x", "Unknown").severity, Severity::Medium);
    }

    #[test]
    fn test_rule_classify_uses_section_title() {
        let rule = Rule {
            index: 1,
            text: "Keep modules flat".into(),
            section: SectionKind::CodeConstraint,
        };
        assert_eq!(rule.classify().penalty, 10);
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(SectionKind::DependencyRules.to_string(), "Dependency Rules");
        assert_eq!(SectionKind::CodeConstraint.to_string(), "Code Constraint");
    }
}
