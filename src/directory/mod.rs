//! Agent directory
//!
//! Records are loaded once per session and never mutated. The view state
//! (query + category selection) lives in [`DirectoryView`], and the visible
//! subset is recomputed from it on every read.

pub mod catalog;
pub mod filter;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use filter::filter;

/// A directory entry describing one AI agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Opaque unique identifier
    pub id: String,

    /// Display title
    pub name: String,

    pub description: String,

    pub category: Category,

    /// Attribution, usually a handle like "@someone"
    pub creator: String,

    /// Short capability labels, in the order they were entered
    pub capabilities: Vec<String>,

    /// Absent means "not provided", never an empty string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Closed set of classification tags a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Productivity,
    Coding,
    Marketing,
    Gaming,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Productivity,
        Category::Coding,
        Category::Marketing,
        Category::Gaming,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Productivity => "productivity",
            Category::Coding => "coding",
            Category::Marketing => "marketing",
            Category::Gaming => "gaming",
            Category::Other => "other",
        }
    }

    /// Title-cased label for display ("Productivity")
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "productivity" => Ok(Category::Productivity),
            "coding" => Ok(Category::Coding),
            "marketing" => Ok(Category::Marketing),
            "gaming" => Ok(Category::Gaming),
            "other" => Ok(Category::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Category selection for browsing. `All` is a filter option only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable option, "all" first
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Summary numbers shown above the listing
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryStats {
    pub total_agents: usize,
    pub categories: usize,
    pub per_category: IndexMap<Category, usize>,
}

/// View state for one browsing session
#[derive(Debug, Clone)]
pub struct DirectoryView {
    records: Vec<AgentRecord>,
    query: String,
    category: CategoryFilter,
}

impl DirectoryView {
    pub fn new(records: Vec<AgentRecord>) -> Self {
        Self {
            records,
            query: String::new(),
            category: CategoryFilter::All,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.set_category(category);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        log::debug!("Directory query set to {:?}", self.query);
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        log::debug!("Directory category set to {}", self.category);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    /// Records matching the current selection, in directory order
    pub fn visible(&self) -> Vec<&AgentRecord> {
        filter(&self.records, &self.query, self.category)
    }

    pub fn stats(&self) -> DirectoryStats {
        let mut per_category: IndexMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();
        for record in &self.records {
            *per_category.entry(record.category).or_insert(0) += 1;
        }

        DirectoryStats {
            total_agents: self.records.len(),
            categories: Category::ALL.len(),
            per_category,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
