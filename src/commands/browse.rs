//! Directory browsing

use colored::*;
use eyre::Result;
use terminal_size::{Width, terminal_size};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::directory::{AgentRecord, CategoryFilter};

use super::load_directory;

/// Lines of description shown per card
const DESCRIPTION_LINES: usize = 3;

/// Capabilities shown per card
const CARD_CAPABILITIES: usize = 3;

pub fn run(query: Option<String>, category: CategoryFilter, format: OutputFormat, config: &Config) -> Result<()> {
    let view = load_directory(config)?
        .with_query(query.unwrap_or_default())
        .with_category(category);
    let agents = view.visible();
    log::info!(
        "Browse query={:?} category={} -> {} of {} agents",
        view.query(),
        view.category(),
        agents.len(),
        view.records().len()
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&agents)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&agents)?),
        OutputFormat::Text => {
            if agents.is_empty() {
                println!("  {}", "No agents found matching your search.".dimmed());
                return Ok(());
            }

            let width = get_terminal_width().saturating_sub(4).max(20);
            for agent in agents {
                print_card(agent, width);
            }
        }
    }

    Ok(())
}

fn print_card(agent: &AgentRecord, width: usize) {
    println!("  {} {}", agent.name.bold(), format!("[{}]", agent.category).blue());

    for line in clamp_lines(&wrap_text(&agent.description, width), DESCRIPTION_LINES) {
        println!("    {}", line.dimmed());
    }

    if !agent.capabilities.is_empty() {
        let shown: Vec<&str> = agent
            .capabilities
            .iter()
            .take(CARD_CAPABILITIES)
            .map(String::as_str)
            .collect();
        println!("    {}", shown.join(" · ").cyan());
    }

    if let Some(ref website) = agent.website {
        println!("    {}", website.underline());
    }
    println!("    by {}", agent.creator.magenta());
    println!();
}

/// Get terminal width, defaulting to 80 if not available
fn get_terminal_width() -> usize {
    terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(80)
}

/// Wrap text to max_width, returning lines
fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in s.split_whitespace() {
        let word_len = word.chars().count();

        if current_len == 0 {
            current = word.to_string();
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Keep the first `max` lines, marking the cut with an ellipsis
fn clamp_lines(lines: &[String], max: usize) -> Vec<String> {
    if lines.len() <= max {
        return lines.to_vec();
    }

    let mut kept = lines[..max].to_vec();
    if let Some(last) = kept.last_mut() {
        last.push('…');
    }
    kept
}
