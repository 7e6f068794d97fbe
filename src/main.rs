use anyhow::Result;

use skill_radar::cli::Command;
use skill_radar::{
    handle_completions, handle_games, handle_history, handle_profile, handle_recommend,
    handle_record, handle_reset, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Record {
            actor,
            game,
            score,
            elapsed,
        } => handle_record(actor, game, *score, *elapsed),
        Command::History { actor } => handle_history(actor),
        Command::Profile { actor } => handle_profile(actor),
        Command::Recommend { actor } => handle_recommend(actor),
        Command::Games => handle_games(),
        Command::Reset => handle_reset(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
