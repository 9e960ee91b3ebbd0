use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::directory::{Category, CategoryFilter};

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "clawmarket",
    about = "ClawMarketPlace - Free directory of AI agents for every task",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/clawmarket/logs/clawmarket.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, global = true, help = "Path to clawmarket.yaml config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and search the agent directory
    #[command(visible_alias = "list")]
    Browse {
        /// Text to find in agent names and descriptions (case-insensitive)
        query: Option<String>,

        /// Category to show ("all" or a category name)
        #[arg(long, short = 'c', default_value = "all")]
        category: CategoryFilter,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Draft a new agent entry and copy it to the clipboard
    Submit(SubmitArgs),

    /// List category filter options
    Categories {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show directory statistics
    Stats {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args)]
pub struct SubmitArgs {
    /// Agent name, e.g. "CodeAssist Pro"
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// What the agent does
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub description: String,

    #[arg(long, value_enum, default_value_t = Category::Productivity)]
    pub category: Category,

    /// Your name or handle, e.g. "@yourhandle"
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub creator: String,

    /// Comma-separated capabilities, e.g. "Code generation, Bug fixing"
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub capabilities: String,

    /// Agent website (optional)
    #[arg(long)]
    pub website: Option<String>,

    /// Print the payload instead of copying it to the clipboard
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },
}
