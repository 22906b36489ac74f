//! src/core/types.rs
//!
//! Core type definitions shared by the portal widgets
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Category`: Service category tag carried by every catalog entry
//! - `CategoryFilter`: Tab selection (a single category or the `all` wildcard)
//! - `CatalogEntry`: One static service listing
//! - `ServiceDetail`: Mocked detail record shown in the info overlay
//! - `Span`: A run of display text, optionally highlighted
//!
//! All types are plain data. Visibility, highlighting and open/closed flags
//! are computed by the controllers, never stored on these types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service category tag
///
/// The token form (`citizen`, `business`, `digital`) is what tab buttons
/// carry; the display form is what the count label shows.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Services for individual citizens (identity, travel, licences)
    Citizen,
    /// Services for businesses (registration, tax)
    Business,
    /// Digital-only services
    Digital,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 3] = [Category::Citizen, Category::Business, Category::Digital];

    /// Returns the token used by tab buttons
    pub fn token(&self) -> &'static str {
        match self {
            Category::Citizen => "citizen",
            Category::Business => "business",
            Category::Digital => "digital",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Citizen => write!(f, "Citizen Services"),
            Category::Business => write!(f, "Business Services"),
            Category::Digital => write!(f, "Digital Services"),
        }
    }
}

/// Error returned when a tab token is not recognised
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Unknown category '{0}' (expected all, citizen, business or digital)")]
pub struct UnknownCategory(pub String);

/// Tab selection for the catalog
///
/// `All` is the wildcard tab; `Only` restricts to one category.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CategoryFilter {
    /// Every entry passes
    #[default]
    All,
    /// Only entries of this category pass
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if an entry of `category` passes this tab
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "citizen" => Ok(CategoryFilter::Only(Category::Citizen)),
            "business" => Ok(CategoryFilter::Only(Category::Business)),
            "digital" => Ok(CategoryFilter::Only(Category::Digital)),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All Services"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// One static service listing
///
/// # Example
/// ```ignore
/// let entry = CatalogEntry::new(
///     Category::Citizen,
///     "Passport Services",
///     "Apply for a new passport or renew an existing one.",
///     &["Fresh passport", "Renewal", "Tatkal"],
/// );
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Category tag used by the tab filter
    pub category: Category,
    /// Service title (searched and highlighted)
    pub title: String,
    /// One-line description (searched and highlighted)
    pub description: String,
    /// Feature bullets (searched, never highlighted)
    pub features: Vec<String>,
}

impl CatalogEntry {
    /// Creates an entry from borrowed strings
    pub fn new(category: Category, title: &str, description: &str, features: &[&str]) -> Self {
        Self {
            category,
            title: title.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Returns the lower-cased text searched by the catalog query
    ///
    /// Title, description and every feature bullet joined by single spaces.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.title, self.description);
        if !self.features.is_empty() {
            text.push(' ');
            text.push_str(&self.features.join(" "));
        }
        text.to_lowercase()
    }
}

/// Mocked detail record for the service information overlay
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ServiceDetail {
    /// About this service
    pub description: String,
    /// Required documents
    pub documents: Vec<String>,
    /// Processing time
    pub processing_time: String,
    /// Fees
    pub fees: String,
}

/// A run of display text
///
/// Highlighted text is a sequence of spans; `Mark` is the emphasis marker
/// wrapped around a search match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Span {
    /// Unhighlighted text
    Plain(String),
    /// Highlighted search match
    Mark(String),
}

impl Span {
    /// Returns the text carried by the span
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Mark(text) => text,
        }
    }
}

/// Concatenates spans back into plain text
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}
