pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod models;

pub use analysis::ExportPipeline;
pub use config::Config;
pub use error::{Error, Result};
pub use github::GitHubClient;
