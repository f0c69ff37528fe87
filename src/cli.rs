use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "move-landing", version, about = "Move landing page API")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the API server (default)
    Start,

    /// Print a pricing quote
    Quote {
        /// Display currency (KWD, AED, INR, USD); configured default if omitted
        #[arg(long)]
        currency: Option<String>,

        /// Customization module to include, e.g. --module CRM (repeatable)
        #[arg(short, long = "module")]
        modules: Vec<String>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Talk to the chat assistant
    Chat {
        /// Send a single message instead of starting an interactive session
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
