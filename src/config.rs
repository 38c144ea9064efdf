use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub repo: String,
}

impl Config {
    /// Reads `GH_API_TOKEN` and `REPO` from the environment. A repository
    /// passed on the command line takes precedence over `REPO`.
    pub fn from_env(repo_override: Option<String>) -> Result<Self> {
        let api_token = env::var("GH_API_TOKEN")
            .map_err(|_| Error::Config("GH_API_TOKEN environment variable not set".to_string()))?;

        let repo = match repo_override {
            Some(repo) => repo,
            None => env::var("REPO").map_err(|_| {
                Error::Config("REPO environment variable not set and --repo not given".to_string())
            })?,
        };

        if !repo.contains('/') {
            return Err(Error::Config(format!(
                "repository {:?} is not in owner/name form",
                repo
            )));
        }

        Ok(Self { api_token, repo })
    }
}
