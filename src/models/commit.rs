use serde::{Deserialize, Serialize};

/// One entry from the repository commits endpoint. Only the message is
/// needed for warden attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSummary {
    pub sha: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    pub message: String,
}
