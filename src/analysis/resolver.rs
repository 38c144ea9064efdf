use crate::analysis::labels;
use crate::analysis::registry::PrimaryRegistry;
use crate::error::Result;
use crate::models::{InternalId, Issue, Severity};

/// Classifies an issue that did not earn its own internal id. Rule order
/// matters: withdrawn, then invalid, then duplicate resolution, then the
/// catch-all.
pub fn classify_non_primary(
    issue: &Issue,
    registry: &PrimaryRegistry,
) -> Result<(Severity, InternalId)> {
    let names = issue.label_names();

    if labels::has_label(&names, "withdrawn by warden") {
        return Ok((Severity::Withdrawn, InternalId::Withdrawn));
    }

    if labels::is_invalid(&names) {
        return Ok((Severity::Invalid, InternalId::Invalid));
    }

    if labels::has_label(&names, "duplicate") {
        let resolved = match labels::duplicate_target_of(&names)? {
            Some(target) => match registry.get(target) {
                Some(primary) => primary,
                // Duplicate of a rejected or nonexistent finding.
                None => (Severity::Invalid, InternalId::Invalid),
            },
            None => (Severity::Invalid, InternalId::Invalid),
        };
        return Ok(resolved);
    }

    // Escape hatch for label states no rule anticipates; surfaced in the
    // export for manual review instead of aborting the run.
    Ok((Severity::Unknown, InternalId::Unknown))
}
