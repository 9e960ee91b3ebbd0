use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "clawmarket Configuration".bold());
            println!();

            println!("{}: {}", "log_level".cyan(), config.log_level.as_filter());
            match config.catalog_path() {
                Some(path) => println!("{}: {}", "catalog".cyan(), path.display()),
                None => println!("{}: {}", "catalog".cyan(), "(built-in sample agents)".dimmed()),
            }
            println!();

            println!("{}:", "clipboard".cyan());
            println!(
                "  command: {}",
                config.clipboard.command.as_deref().unwrap_or("(auto-detect)")
            );
            println!();

            println!("{}:", "submission".cyan());
            println!("  repo_url: {}", config.submission.repo_url);
            println!("  edit_url: {}", config.submission.edit_url);
            println!("  target_file: {}", config.submission.target_file);
            println!("  target_array: {}", config.submission.target_array);
        }
    }

    Ok(())
}

fn lookup(key: &str, config: &Config) -> Option<String> {
    match key {
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "catalog" => Some(
            config
                .catalog_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        ),
        "clipboard.command" => Some(config.clipboard.command.clone().unwrap_or_default()),
        "submission.repo_url" => Some(config.submission.repo_url.clone()),
        "submission.edit_url" => Some(config.submission.edit_url.clone()),
        "submission.target_file" => Some(config.submission.target_file.clone()),
        "submission.target_array" => Some(config.submission.target_array.clone()),
        _ => None,
    }
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            eyre::bail!("Unknown config key: {}", key);
        }
    }

    Ok(())
}
