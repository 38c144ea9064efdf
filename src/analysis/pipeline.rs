use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::labels::AGREEMENTS_TITLE;
use crate::analysis::registry::PrimaryRegistry;
use crate::analysis::{authors, resolver, scoring};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{CommitSummary, FindingRow, Issue, Severity};

/// One-shot batch: fetch issues and commits, classify, score, sort.
pub struct ExportPipeline {
    github: GitHubClient,
}

impl ExportPipeline {
    pub fn new(github: GitHubClient) -> Self {
        Self { github }
    }

    pub async fn run(&self) -> Result<Vec<FindingRow>> {
        tracing::info!("Fetching all issues from GitHub...");
        let spinner = phase_spinner("issues");
        let issues = self.github.get_issues().await?;
        spinner.finish_with_message(format!("{} issues fetched", issues.len()));

        tracing::info!("Fetching all commits from GitHub...");
        let spinner = phase_spinner("commits");
        let commits = self.github.get_commits().await?;
        spinner.finish_with_message(format!("{} commits fetched", commits.len()));

        tracing::info!("Parsing data...");
        build_rows(&issues, &commits)
    }
}

/// Pure half of the pipeline; separated from the fetch so the whole
/// classify/score/sort path runs against in-memory fixtures.
pub fn build_rows(issues: &[Issue], commits: &[CommitSummary]) -> Result<Vec<FindingRow>> {
    let authors = authors::resolve_authors(commits);
    let registry = PrimaryRegistry::build(issues);
    tracing::info!("Registered {} primary findings", registry.len());

    let mut rows = Vec::with_capacity(issues.len());
    for issue in issues {
        // The administrative issue never becomes a row, but its commit (if
        // any) already contributed to author resolution above.
        if issue.title == AGREEMENTS_TITLE {
            continue;
        }

        let (severity, internal_id) = match registry.get(issue.number) {
            Some(entry) => entry,
            None => resolver::classify_non_primary(issue, &registry)?,
        };
        if severity == Severity::Unknown {
            tracing::warn!(
                "Issue #{} matches no classification rule; exported as UNKNOWN",
                issue.number
            );
        }

        rows.push(scoring::build_row(issue, severity, internal_id, &registry, &authors)?);
    }

    scoring::sort_rows(&mut rows);
    Ok(rows)
}

fn phase_spinner(what: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} fetching {msg}...")
            .unwrap(),
    );
    pb.set_message(what.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
