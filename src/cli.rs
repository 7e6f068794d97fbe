use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "skill-radar assessment backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Record a finished game session
    Record {
        /// Learner identity
        actor: String,
        /// Game id from the catalog
        game: String,
        /// Final score, 0-100
        #[arg(allow_negative_numbers = true)]
        score: i64,
        /// Time taken in seconds
        elapsed: u32,
    },
    /// List every recorded attempt of a learner, oldest first
    History { actor: String },
    /// Show the skill radar profile of a learner
    Profile { actor: String },
    /// Suggest the next game for a learner
    Recommend { actor: String },
    /// List the games in the catalog
    Games,
    /// Drop all recorded attempts
    Reset,
    /// Print shell completions
    Completions { shell: Shell },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_with_negative_score() {
        let cli = Cli::try_parse_from(["skill_radar", "record", "ada", "color-sorter", "-1", "30"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Record {
                actor: "ada".to_string(),
                game: "color-sorter".to_string(),
                score: -1,
                elapsed: 30,
            }
        );
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["skill_radar", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
