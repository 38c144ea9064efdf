use std::collections::HashMap;

use crate::analysis::labels::{self, AGREEMENTS_TITLE};
use crate::models::{InternalId, Issue, Severity};

/// Internal identifiers for accepted primary findings. Built in one ordered
/// pass and immutable afterwards.
#[derive(Debug, Default)]
pub struct PrimaryRegistry {
    entries: HashMap<u64, (Severity, InternalId)>,
}

impl PrimaryRegistry {
    /// Scans issues in fetch order. A finding is primary iff it has a
    /// severity, is not invalid, carries no "withdrawn" or "duplicate"
    /// label, and is not the administrative issue. Sequence numbers run per
    /// severity class starting at 1, dense, in fetch order only.
    pub fn build(issues: &[Issue]) -> Self {
        let mut entries = HashMap::new();
        let mut counters: HashMap<Severity, u32> = HashMap::new();

        for issue in issues {
            let names = issue.label_names();
            let Some(severity) = labels::severity_of(&names) else {
                continue;
            };
            if labels::is_invalid(&names)
                || labels::has_label(&names, "withdrawn")
                || labels::has_label(&names, "duplicate")
                || issue.title == AGREEMENTS_TITLE
            {
                continue;
            }

            let counter = counters.entry(severity).or_insert(1);
            entries.insert(issue.number, (severity, InternalId::Assigned(severity, *counter)));
            *counter += 1;
        }

        Self { entries }
    }

    pub fn contains(&self, number: u64) -> bool {
        self.entries.contains_key(&number)
    }

    pub fn get(&self, number: u64) -> Option<(Severity, InternalId)> {
        self.entries.get(&number).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueLabel;

    fn issue(number: u64, title: &str, label_names: &[&str]) -> Issue {
        Issue {
            number,
            title: title.to_string(),
            labels: label_names
                .iter()
                .map(|l| IssueLabel { name: l.to_string() })
                .collect(),
            html_url: format!("https://github.com/org/findings/issues/{}", number),
        }
    }

    #[test]
    fn test_sequence_numbers_are_dense_per_class() {
        // Tracker ids are deliberately non-contiguous; sequence numbers
        // follow fetch order, not tracker ids.
        let issues = vec![
            issue(31, "a", &["3 (High Risk)"]),
            issue(7, "b", &["2 (Med Risk)"]),
            issue(90, "c", &["3 (High Risk)"]),
            issue(4, "d", &["3 (High Risk)"]),
        ];
        let registry = PrimaryRegistry::build(&issues);

        assert_eq!(registry.get(31).unwrap().1.to_string(), "H-001");
        assert_eq!(registry.get(90).unwrap().1.to_string(), "H-002");
        assert_eq!(registry.get(4).unwrap().1.to_string(), "H-003");
        assert_eq!(registry.get(7).unwrap().1.to_string(), "M-001");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_non_primary_issues_are_excluded() {
        let issues = vec![
            issue(1, "dup", &["3 (High Risk)", "duplicate-9"]),
            issue(2, "invalid", &["3 (High Risk)", "unsatisfactory"]),
            issue(3, "withdrawn", &["3 (High Risk)", "withdrawn by warden"]),
            issue(4, "no severity", &["bug"]),
            issue(5, AGREEMENTS_TITLE, &["3 (High Risk)"]),
            issue(6, "ok", &["3 (High Risk)"]),
        ];
        let registry = PrimaryRegistry::build(&issues);

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(6));
        assert_eq!(registry.get(6).unwrap().0, Severity::High);
        assert_eq!(registry.get(6).unwrap().1.to_string(), "H-001");
    }
}
