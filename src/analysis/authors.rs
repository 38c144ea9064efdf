use std::collections::HashMap;

use crate::models::CommitSummary;

/// Administrative commits reuse the "issue #" convention without naming the
/// submitting warden.
const SKIP_MARKERS: [&str; 3] = ["data for issue", "updated by", "withdrawn by"];

/// Maps issue numbers to warden names using the submission commit convention
/// `<warden> issue #<number>`. Later commits for the same issue overwrite
/// earlier ones; that last-write-wins behavior is part of the contract.
pub fn resolve_authors(commits: &[CommitSummary]) -> HashMap<u64, String> {
    let mut authors = HashMap::new();

    for commit in commits {
        let message = &commit.commit.message;
        if SKIP_MARKERS.iter().any(|m| message.contains(m)) {
            continue;
        }

        let parts: Vec<&str> = message.split(" issue #").collect();
        if parts.len() != 2 {
            continue;
        }

        match parts[1].trim().parse::<u64>() {
            Ok(number) => {
                authors.insert(number, parts[0].to_string());
            }
            Err(_) => {
                tracing::debug!("Ignoring malformed submission commit: {:?}", message);
            }
        }
    }

    authors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommitDetails;

    fn commit(message: &str) -> CommitSummary {
        CommitSummary {
            sha: "0000000".to_string(),
            commit: CommitDetails {
                message: message.to_string(),
            },
        }
    }

    #[test]
    fn test_resolves_submission_commits() {
        let commits = vec![commit("0xAlice issue #12"), commit("bob issue #7")];
        let authors = resolve_authors(&commits);
        assert_eq!(authors.get(&12), Some(&"0xAlice".to_string()));
        assert_eq!(authors.get(&7), Some(&"bob".to_string()));
    }

    #[test]
    fn test_skips_administrative_commits() {
        let commits = vec![
            commit("data for issue #12"),
            commit("issue #12 updated by judge"),
            commit("issue #12 withdrawn by warden"),
        ];
        assert!(resolve_authors(&commits).is_empty());
    }

    #[test]
    fn test_requires_exactly_two_parts() {
        // Two separators produce three parts, which is not a submission.
        let commits = vec![commit("alice issue #1 issue #2")];
        assert!(resolve_authors(&commits).is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let commits = vec![commit("alice issue #5"), commit("mallory issue #5")];
        let authors = resolve_authors(&commits);
        assert_eq!(authors.get(&5), Some(&"mallory".to_string()));
    }

    #[test]
    fn test_ignores_non_numeric_issue_suffix() {
        let commits = vec![commit("alice issue #twelve")];
        assert!(resolve_authors(&commits).is_empty());
    }
}
