use crate::error::{Error, Result};
use crate::models::Severity;

/// Administrative issue present in every contest repo; excluded from export.
pub const AGREEMENTS_TITLE: &str = "Agreements & Disclosures";

/// Substring containment over the whole label set. Deliberately permissive:
/// the contest label vocabulary is free text ("3 (High Risk)",
/// "duplicate-49") and any label merely containing the needle matches.
pub fn has_label(labels: &[String], needle: &str) -> bool {
    labels.iter().any(|l| l.contains(needle))
}

/// Maps the label set to a severity class. Precedence is fixed: first match
/// wins, in the order High > Medium > QA > Gas.
pub fn severity_of(labels: &[String]) -> Option<Severity> {
    if has_label(labels, "High Risk") {
        return Some(Severity::High);
    }
    if has_label(labels, "Med Risk") {
        return Some(Severity::Medium);
    }
    if has_label(labels, "Quality Assurance") {
        return Some(Severity::Qa);
    }
    if has_label(labels, "Gas Optimization") {
        return Some(Severity::Gas);
    }
    None
}

pub fn is_invalid(labels: &[String]) -> bool {
    has_label(labels, "unsatisfactory") || has_label(labels, "nullified")
}

/// Extracts the primary issue number from a label like `duplicate-49`.
/// Trailing non-digit text after the number is ignored (`duplicate-49-note`
/// still parses to 49), but a suffix with no leading digits is a data error.
pub fn duplicate_target_of(labels: &[String]) -> Result<Option<u64>> {
    let Some(label) = labels.iter().find(|l| l.contains("duplicate-")) else {
        return Ok(None);
    };
    let suffix = label.rsplit("duplicate-").next().unwrap_or("");
    parse_leading_number(suffix, label, "duplicate-").map(Some)
}

/// Extracts the fraction from a label like `partial-75` (0.75). Absent means
/// no partial reduction, not a zero score.
pub fn partial_score_of(labels: &[String]) -> Result<f64> {
    let Some(label) = labels.iter().find(|l| l.contains("partial-")) else {
        return Ok(0.0);
    };
    let suffix = label.rsplit("partial-").next().unwrap_or("");
    let percent = parse_leading_number(suffix, label, "partial-")?;
    Ok(percent as f64 / 100.0)
}

fn parse_leading_number(suffix: &str, label: &str, marker: &str) -> Result<u64> {
    let digits: String = suffix.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(Error::Label {
            label: label.to_string(),
            reason: format!("expected a number after {:?}", marker),
        });
    }
    digits.parse().map_err(|_| Error::Label {
        label: label.to_string(),
        reason: format!("number after {:?} is out of range", marker),
    })
}
