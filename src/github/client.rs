use reqwest::{header, Client};

use crate::config::Config;
use crate::error::Result;
use crate::github::paginator::Paginator;
use crate::models::{CommitSummary, Issue};

/// Thin wrapper over the two paginated list endpoints the exporter needs.
pub struct GitHubClient {
    client: Client,
    repo: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("auditsheet/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            repo: config.repo.clone(),
            base_url: "https://api.github.com".to_string(),
        })
    }

    /// All issues, open and closed, in the tracker's default listing order.
    pub async fn get_issues(&self) -> Result<Vec<Issue>> {
        let url = format!("{}/repos/{}/issues", self.base_url, self.repo);
        tracing::info!("Fetching issues for: {}", self.repo);
        let mut paginator = Paginator::new(&self.client);
        paginator.fetch_all(&url, &[("state", "all")]).await
    }

    pub async fn get_commits(&self) -> Result<Vec<CommitSummary>> {
        let url = format!("{}/repos/{}/commits", self.base_url, self.repo);
        tracing::info!("Fetching commits for: {}", self.repo);
        let mut paginator = Paginator::new(&self.client);
        paginator.fetch_all(&url, &[]).await
    }
}
