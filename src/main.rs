use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use auditsheet::{Config, ExportPipeline, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "auditsheet")]
#[command(version = "0.1.0")]
#[command(about = "Export a scored findings spreadsheet from an audit contest repository")]
struct Args {
    /// Contest repository in owner/name form (overrides REPO from the environment)
    #[arg(short, long)]
    repo: Option<String>,

    /// Directory the spreadsheet is written into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("auditsheet=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env(args.repo)?;

    tracing::info!(
        "Creating issue summary spreadsheet for repo {}",
        config.repo
    );

    let github = GitHubClient::new(&config)?;
    let pipeline = ExportPipeline::new(github);
    let rows = pipeline.run().await?;

    let path = auditsheet::export::write_spreadsheet(&rows, &config.repo, &args.output_dir)?;
    tracing::info!("Done! Wrote {} issues to: {}", rows.len(), path.display());

    Ok(())
}
