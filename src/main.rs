mod chef;
mod cli;
mod config;
mod error;
mod extraction;
mod pantry;
mod scheduler;
mod store;
mod sync;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::Style;
use tracing_subscriber::EnvFilter;

use chef::Chef;
use cli::{Cli, Command};
use config::SimmerConfig;
use extraction::ExtractionClient;
use pantry::Pantry;
use scheduler::Scheduler;
use error::SimmerError;
use store::{MemoryStore, SyncStore};
use sync::SyncOrchestrator;
use ui::SyncProgress;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "simmer=debug" } else { "simmer=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = SimmerConfig::load()?;
    let store = Arc::new(MemoryStore::with_sample_data());

    match cli.command {
        Command::Sync => run_sync(&config, store).await?,
        Command::Recipes {
            page,
            page_size,
            search,
        } => {
            let chef = Chef::new(store);
            let listing = chef
                .recipes(page, page_size, search.as_deref().unwrap_or(""))
                .await?;
            let bold = Style::new().bold();
            println!(
                "{} (page {})",
                bold.apply_to("Recipes"),
                listing.page
            );
            for recipe in &listing.recipes {
                let synced = if recipe.updated_at.is_some() { "✓" } else { " " };
                println!(
                    "  {synced} [{}] {} — {} min",
                    recipe.id, recipe.title, recipe.cooking_time_minutes
                );
            }
        }
        Command::Pantry => {
            let pantry = Pantry::new(store);
            println!("{}", Style::new().bold().apply_to("Pantry"));
            for ingredient in pantry.ingredients().await? {
                println!(
                    "  {} — {} {}",
                    ingredient.name, ingredient.amount, ingredient.unit.name
                );
            }
        }
        Command::Week { next } => {
            let scheduler = Scheduler::new();
            let week = if next { scheduler.next_week() } else { scheduler.week() };
            println!(
                "{} {} / {}",
                Style::new().bold().apply_to("Week"),
                week.number,
                week.year
            );
            for day in &week.days {
                let marker = if day.is_current_day { "→" } else { " " };
                println!("  {marker} {}", day.title);
            }
        }
    }

    Ok(())
}

async fn run_sync(config: &SimmerConfig, store: Arc<MemoryStore>) -> Result<()> {
    let endpoint = config.require_extraction_endpoint()?;
    let extractor = Arc::new(ExtractionClient::new(endpoint.to_string()));

    let orchestrator = SyncOrchestrator::new(store.clone(), extractor, config.sync_settings());
    let job = orchestrator.start_sync().await?;

    let progress = SyncProgress::start(&job);
    let finished = loop {
        tokio::time::sleep(Duration::from_millis(200)).await;
        match store.get_job(job.id).await? {
            Some(current) if current.status.is_terminal() => break current,
            Some(current) => progress.update(&current),
            None => return Err(SimmerError::JobNotFound(job.id.to_string()).into()),
        }
    };

    progress.complete(&finished);
    progress.print_job(&finished);
    Ok(())
}
