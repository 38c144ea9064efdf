use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity class of a finding. Closed set: label text that matches none of
/// the severity markers can only end up as `Unknown`, never as a new class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Qa,
    Gas,
    Invalid,
    Withdrawn,
    Unknown,
}

impl Severity {
    /// Fixed sort rank, most severe first.
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Qa => 2,
            Severity::Gas => 3,
            Severity::Invalid => 4,
            Severity::Withdrawn => 5,
            Severity::Unknown => 6,
        }
    }

    pub fn initial(self) -> char {
        match self {
            Severity::High => 'H',
            Severity::Medium => 'M',
            Severity::Qa => 'Q',
            Severity::Gas => 'G',
            Severity::Invalid => 'I',
            Severity::Withdrawn => 'W',
            Severity::Unknown => 'U',
        }
    }

    /// Only accepted classes receive their own internal identifiers.
    pub fn is_accepted(self) -> bool {
        matches!(
            self,
            Severity::High | Severity::Medium | Severity::Qa | Severity::Gas
        )
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Qa => "QA",
            Severity::Gas => "Gas",
            Severity::Invalid => "INVALID",
            Severity::Withdrawn => "WITHDRAWN",
            Severity::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Display identifier of a finding: a per-severity sequence number for
/// accepted primaries (`H-001`, `M-012`), or a literal status for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalId {
    Assigned(Severity, u32),
    Invalid,
    Withdrawn,
    Unknown,
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternalId::Assigned(severity, seq) => {
                write!(f, "{}-{:03}", severity.initial(), seq)
            }
            InternalId::Invalid => write!(f, "INVALID"),
            InternalId::Withdrawn => write!(f, "WITHDRAWN"),
            InternalId::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One fully classified and scored spreadsheet row.
#[derive(Debug, Clone)]
pub struct FindingRow {
    pub github_id: u64,
    pub internal_id: InternalId,
    pub duplicate_of: String,
    pub title: String,
    pub warden: String,
    pub weight: Option<f64>,
    pub severity: Severity,
    pub url: String,
    pub labels: Vec<String>,
    pub sort_key: String,
}
