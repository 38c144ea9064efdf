use std::collections::HashMap;

use crate::analysis::labels;
use crate::analysis::registry::PrimaryRegistry;
use crate::error::Result;
use crate::models::{FindingRow, InternalId, Issue, Severity};

/// Builds the export row for one issue whose severity and internal id have
/// already been resolved.
pub fn build_row(
    issue: &Issue,
    severity: Severity,
    internal_id: InternalId,
    registry: &PrimaryRegistry,
    authors: &HashMap<u64, String>,
) -> Result<FindingRow> {
    let names = issue.label_names();
    let duplicate_of = duplicate_display(&names, registry)?;
    let warden = authors.get(&issue.number).cloned().unwrap_or_default();
    let weight = weight_of(&names, severity)?;

    // Composite key: severity rank, internal id, primaries before their
    // duplicates, then warden name.
    let tiebreak = if registry.contains(issue.number) { 'a' } else { 'b' };
    let sort_key = format!("{}{}{}{}", severity.rank(), internal_id, tiebreak, warden);

    Ok(FindingRow {
        github_id: issue.number,
        internal_id,
        duplicate_of,
        title: issue.title.clone(),
        warden,
        weight,
        severity,
        url: issue.html_url.clone(),
        labels: names,
        sort_key,
    })
}

pub fn sort_rows(rows: &mut [FindingRow]) {
    rows.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
}

/// Display form of the duplicate target: the primary's internal id when the
/// target was accepted, otherwise the raw tracker number. The mixed format
/// is intentional and kept for compatibility (see README).
fn duplicate_display(names: &[String], registry: &PrimaryRegistry) -> Result<String> {
    let display = match labels::duplicate_target_of(names)? {
        Some(target) => match registry.get(target) {
            Some((_, internal_id)) => internal_id.to_string(),
            None => target.to_string(),
        },
        None => String::new(),
    };
    Ok(display)
}

/// Invalid and withdrawn findings carry no weight at all. Everything else
/// scores 1, or 1.3 when selected for report, or the partial fraction.
fn weight_of(names: &[String], severity: Severity) -> Result<Option<f64>> {
    if matches!(severity, Severity::Invalid | Severity::Withdrawn) {
        return Ok(None);
    }
    if labels::has_label(names, "selected for report") {
        return Ok(Some(1.3));
    }
    let partial = labels::partial_score_of(names)?;
    if partial != 0.0 {
        return Ok(Some(partial));
    }
    Ok(Some(1.0))
}
