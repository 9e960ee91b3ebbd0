//! Directory statistics

use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::config::Config;

use super::load_directory;

pub fn run(format: OutputFormat, config: &Config) -> Result<()> {
    let stats = load_directory(config)?.stats();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&stats)?),
        OutputFormat::Text => {
            println!("  {:>5}  Total Agents", stats.total_agents.to_string().blue().bold());
            println!("  {:>5}  Categories", stats.categories.to_string().purple().bold());
            println!("  {:>5}  Free", "100%".green().bold());
            println!();
            for (category, count) in &stats.per_category {
                println!("  {:14} {}", category.label().cyan(), count);
            }
        }
    }

    Ok(())
}
