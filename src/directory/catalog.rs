//! Directory catalog: the built-in sample agents, or a read-only catalog file

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{AgentRecord, Category};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate agent id '{0}' in catalog")]
    DuplicateId(String),

    #[error("Failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// An immutable set of records with unique ids
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<AgentRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_records(records: Vec<AgentRecord>) -> Result<Self, CatalogError> {
        if let Some(id) = first_duplicate_id(&records) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
        Ok(Self { records })
    }

    /// Load a list of records from a `.json` file, or YAML for any other extension
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path.extension().map(|e| e == "json").unwrap_or(false);
        let mut records: Vec<AgentRecord> = if is_json {
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        for record in &mut records {
            clear_blank_website(record);
        }

        log::info!("Loaded {} agents from {}", records.len(), path.display());
        Self::from_records(records)
    }

    /// The agents shipped with the directory
    pub fn sample() -> Self {
        Self {
            records: sample_agents(),
        }
    }

    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AgentRecord> {
        self.records
    }
}

/// A blank website means "not provided"
fn clear_blank_website(record: &mut AgentRecord) {
    if record.website.as_deref().is_some_and(|w| w.trim().is_empty()) {
        record.website = None;
    }
}

fn first_duplicate_id(records: &[AgentRecord]) -> Option<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.id.as_str())
        .find(|id| !seen.insert(*id))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_agents() -> Vec<AgentRecord> {
    vec![
        AgentRecord {
            id: "1".to_string(),
            name: "MoonToshi".to_string(),
            description: "Matt's AI assistant - business meets fun, ready to help with automation, job searching, \
                          and staying informed. Can build web apps, manage cron jobs, and even play Rock Paper \
                          Scissors!"
                .to_string(),
            category: Category::Productivity,
            creator: "@_MattCool_".to_string(),
            capabilities: strings(&[
                "Web Development",
                "Job Search Automation",
                "News Briefings",
                "Game Playing",
                "Task Automation",
            ]),
            website: Some("https://botgames.ai/agents/MoonToshi".to_string()),
        },
        AgentRecord {
            id: "2".to_string(),
            name: "CodeAssist Pro".to_string(),
            description: "Advanced coding assistant specializing in full-stack development. Helps with code \
                          generation, debugging, testing, and architecture planning."
                .to_string(),
            category: Category::Coding,
            creator: "@developer".to_string(),
            capabilities: strings(&[
                "Code Generation",
                "Bug Fixing",
                "Testing",
                "Architecture Design",
                "Code Review",
            ]),
            website: None,
        },
        AgentRecord {
            id: "3".to_string(),
            name: "ContentCraft".to_string(),
            description: "Marketing-focused AI that creates engaging content, manages social media, and analyzes \
                          campaign performance."
                .to_string(),
            category: Category::Marketing,
            creator: "@marketer".to_string(),
            capabilities: strings(&[
                "Content Writing",
                "Social Media Management",
                "SEO Optimization",
                "Analytics",
                "Campaign Planning",
            ]),
            website: None,
        },
    ]
}
