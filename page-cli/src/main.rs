//! hwp-pages CLI: process documents, show statistics, or run an interactive session.
//! Config from env (.env supported) and optional CLI overrides.

use anyhow::{Context, Result};
use clap::Parser;
use page_cli::presenter::{render_outcome, render_outcome_json, render_stats};
use page_cli::{interactive, load_documents, Cli, Commands};
use page_core::{init_tracing, DocumentStore};
use page_estimator::components::today;
use page_estimator::{build_app, create_store, App, AppConfig, BaseConfig, StatisticsLedger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut base = BaseConfig::load();
    if let Some(url) = cli.database_url.clone() {
        base.database_url = url;
    }
    if let Some(log_file) = cli.log_file.clone() {
        base.log_file = log_file;
    }
    init_tracing(&base.log_file).context("Initialize logging")?;
    info!(command = ?cli.command, ephemeral = cli.ephemeral, database_url = %base.database_url, "hwp-pages starting");

    match cli.command {
        Commands::Process { documents, json } => {
            let documents = load_documents(&documents)?;
            info!(count = documents.len(), "Loaded documents");
            let mut app = build(base, cli.ephemeral).await?;
            app.set_documents(DocumentStore::from_documents(documents));
            handle_process(app, json).await
        }
        Commands::Stats => handle_stats(&base, cli.ephemeral).await,
        Commands::Interactive => {
            let app = build(base, cli.ephemeral).await?;
            interactive::run(app).await
        }
    }
}

/// Loads the LLM config from env on top of the (possibly overridden) base config.
async fn build(base: BaseConfig, ephemeral: bool) -> Result<App> {
    let mut config = AppConfig::load().context("Load LLM config (API_KEY, LLM_BASE_URL, MODEL)")?;
    config.base = base;
    build_app(&config, ephemeral).await
}

async fn handle_process(mut app: App, json: bool) -> Result<()> {
    let state = app.process().await;

    match (state.outcome(), state.error()) {
        (Some(outcome), _) => {
            if json {
                println!("{}", render_outcome_json(outcome)?);
            } else {
                print!("{}", render_outcome(outcome));
            }
            Ok(())
        }
        (None, Some(e)) => {
            error!(error = ?e, "Process command failed");
            anyhow::bail!("{}", e)
        }
        (None, None) => anyhow::bail!("Run did not complete"),
    }
}

/// Starting a session is a visit: the day counter advances on a new date, as on any load.
async fn handle_stats(base: &BaseConfig, ephemeral: bool) -> Result<()> {
    let store = create_store(base, ephemeral).await?;
    let ledger = StatisticsLedger::start_session(store, today()).await?;
    print!("{}", render_stats(ledger.counters()));
    Ok(())
}
