//! Agent submission command
//!
//! Copies the drafted entry to the clipboard and explains how to open the
//! pull request that actually adds it to the directory.

use colored::*;
use eyre::Result;

use crate::cli::SubmitArgs;
use crate::clipboard::SystemClipboard;
use crate::config::{Config, SubmissionConfig};
use crate::submit::form::SubmissionForm;
use crate::submit::payload::to_payload;
use crate::submit::{FormFields, compose};

pub fn run(args: SubmitArgs, config: &Config) -> Result<()> {
    let dry_run = args.dry_run;
    let fields = FormFields {
        name: args.name,
        description: args.description,
        category: args.category,
        creator: args.creator,
        capabilities: args.capabilities,
        website: args.website.unwrap_or_default(),
    };

    if dry_run {
        return preview(&fields);
    }

    let mut form = SubmissionForm::new(fields);
    let mut clipboard = SystemClipboard::new(config.clipboard.command.clone());

    match form.submit(&mut clipboard) {
        Ok(submission) => {
            println!("{}", "SUCCESS!".green().bold());
            println!("Your agent details have been copied to clipboard!");
            println!();
            print_instructions(&config.submission);
            log::debug!("Agent to submit:\n{}", submission.payload);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e.user_message());
            Err(e.into())
        }
    }
}

fn preview(fields: &FormFields) -> Result<()> {
    match compose(fields) {
        Ok(record) => {
            println!("{}", to_payload(&record)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            Err(e.into())
        }
    }
}

fn print_instructions(submission: &SubmissionConfig) {
    println!("To complete your submission:");
    println!("  1. Go to the GitHub repo: {}", submission.repo_url.cyan());
    println!("  2. Open {}", submission.target_file.green());
    println!("  3. Find the {} array", submission.target_array.cyan());
    println!("  4. Paste your agent data (already in clipboard!)");
    println!("  5. Create a Pull Request");
    println!();
    println!("Edit directly: {}", submission.edit_url.underline());
}
