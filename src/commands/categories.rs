use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::directory::CategoryFilter;

#[derive(Serialize)]
struct CategoryInfo {
    name: &'static str,
    label: String,
}

pub fn run(format: OutputFormat) -> Result<()> {
    let infos: Vec<CategoryInfo> = CategoryFilter::options()
        .iter()
        .map(|c| CategoryInfo {
            name: c.as_str(),
            label: c.label(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&infos)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&infos)?),
        OutputFormat::Text => {
            println!("{}", "Categories:".bold());
            for info in &infos {
                println!("  {:14} {}", info.name.cyan(), info.label.dimmed());
            }
        }
    }

    Ok(())
}
