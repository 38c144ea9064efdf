use serde::{Deserialize, Serialize};

/// A contest finding as returned by the GitHub issues endpoint. Immutable
/// once fetched; issues are kept in fetch order throughout the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub labels: Vec<IssueLabel>,
    pub html_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueLabel {
    pub name: String,
}

impl Issue {
    /// Flattens the label objects into their bare names.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.name.clone()).collect()
    }
}
