pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod recorder;
pub mod services;
pub mod skills;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::console;
use crate::services::pipeline::Pipeline;
use crate::services::server::ServerService;
use crate::store::SqliteAttemptStore;

pub use crate::errors::PipelineError;
pub use crate::recorder::AttemptRecorder;
pub use crate::skills::SkillAggregator;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_record(actor: &str, game: &str, score: i64, elapsed: u32) -> Result<()> {
    let pipeline = Pipeline::open(&AppConfig::from_env())?;
    let record = pipeline.recorder.record(actor, game, score, elapsed)?;
    console::print_attempt(&record);
    Ok(())
}

pub fn handle_history(actor: &str) -> Result<()> {
    let pipeline = Pipeline::open(&AppConfig::from_env())?;
    let attempts = pipeline.recorder.query_by_actor(actor)?;
    console::print_history(actor, &attempts);
    Ok(())
}

pub fn handle_profile(actor: &str) -> Result<()> {
    let pipeline = Pipeline::open(&AppConfig::from_env())?;
    let report = pipeline.aggregator.compute_report(actor)?;
    console::print_report(actor, &report);
    Ok(())
}

pub fn handle_recommend(actor: &str) -> Result<()> {
    let pipeline = Pipeline::open(&AppConfig::from_env())?;
    let recommendation = pipeline.aggregator.compute_recommendation(actor)?;
    console::print_recommendation(actor, &recommendation, &pipeline.catalog);
    Ok(())
}

pub fn handle_games() -> Result<()> {
    let app_config = AppConfig::from_env();
    let catalog = config::load_catalog(&app_config.catalog)?;
    console::print_games(&catalog);
    Ok(())
}

pub fn handle_reset() -> Result<()> {
    let config = AppConfig::from_env();
    let store = SqliteAttemptStore::open(&config.storage.database_path)?;
    store.reset()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
