use anyhow::Result;
use hrfetch::{config::Source, report, sheet};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    if let Err(err) = run().await {
        // The original tool talks to people on stdout, hints included.
        println!("\nError: {err:#}");
        println!("Hints:");
        println!("- Check that the file, directory and branch names are correct.");
        println!("- If the repo is private, set GITHUB_TOKEN before running:");
        println!("  Windows (PowerShell):  $env:GITHUB_TOKEN='YOUR_TOKEN_HERE'");
        println!("  macOS/Linux (bash):    export GITHUB_TOKEN='YOUR_TOKEN_HERE'");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let src = Source::default();
    let client = Client::builder().timeout(src.timeout).build()?;
    info!(owner = %src.owner, repo = %src.repo, branch = %src.branch, "startup");

    println!("Loading HR data from GitHub…");
    // Strictly one after another; each file is reported as soon as it loads,
    // so an earlier report stands even if a later file fails.
    for path in &src.files {
        let loaded = sheet::load(&client, &src, path).await?;
        let name = path.rsplit('/').next().unwrap_or(path.as_str());
        report::quick_overview(&loaded, name, &src.id_columns);
    }
    Ok(())
}
