// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Service catalog filtering and search
//!
//! The catalog is a static list of entries. Nothing is ever removed from it:
//! a `CatalogQuery` (tab + search text) is applied to produce a view in which
//! each entry is either visible or hidden, with search matches highlighted.
//!
//! # Visibility
//!
//! The most recent action decides what is shown. After a tab selection an
//! entry is visible when its category passes the tab. After a search it is
//! visible when its combined text contains the query, whatever its category,
//! and an empty search shows the whole catalog. Matching is case-insensitive
//! substring search.

use regex::RegexBuilder;

use crate::core::types::{CatalogEntry, Category, CategoryFilter, Span};

/// Returns the built-in service catalog
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            Category::Citizen,
            "Aadhaar Services",
            "Enroll for Aadhaar, update demographic details or download your e-Aadhaar.",
            &["New enrollment", "Address update", "Download e-Aadhaar"],
        ),
        CatalogEntry::new(
            Category::Citizen,
            "Passport Services",
            "Apply for a fresh passport, renew an expiring one or track your application.",
            &["Fresh passport", "Passport renewal", "Application tracking"],
        ),
        CatalogEntry::new(
            Category::Citizen,
            "Driving License",
            "Apply for a learner's or permanent driving license and book a driving test.",
            &["Learner's license", "Permanent license", "Test slot booking"],
        ),
        CatalogEntry::new(
            Category::Citizen,
            "Income Tax Services",
            "File income tax returns online and check refund status.",
            &["e-Filing", "Refund status", "Form 26AS"],
        ),
        CatalogEntry::new(
            Category::Business,
            "Company Registration",
            "Incorporate a new company and obtain its identification number.",
            &["Name reservation", "Incorporation", "Director identification"],
        ),
        CatalogEntry::new(
            Category::Business,
            "GST Registration",
            "Register for goods and services tax and file periodic returns.",
            &["New registration", "Return filing", "Payment of tax"],
        ),
        CatalogEntry::new(
            Category::Business,
            "Business License",
            "Obtain trade and shop licenses from your local authority.",
            &["Trade license", "Shop establishment", "License renewal"],
        ),
        CatalogEntry::new(
            Category::Digital,
            "DigiLocker",
            "Store and share issued documents securely in the cloud.",
            &["Issued documents", "Secure sharing", "e-Sign"],
        ),
        CatalogEntry::new(
            Category::Digital,
            "UMANG App",
            "Access central and state government services from a single mobile app.",
            &["Bill payments", "Pension services", "Registration"],
        ),
    ]
}

/// Current tab and search text applied to the catalog
///
/// The query is stored normalised (trimmed, lower-cased).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CatalogQuery {
    tab: CategoryFilter,
    query: String,
    scope: Scope,
}

/// Which control last decided visibility
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Scope {
    #[default]
    Tab,
    Search,
}

/// How one entry is presented after the query is applied
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryView {
    /// Position of the entry in the catalog
    pub index: usize,
    /// Whether the entry is shown
    pub visible: bool,
    /// Title spans (first match marked when searching)
    pub title: Vec<Span>,
    /// Description spans (first match marked when searching)
    pub description: Vec<Span>,
}

/// Result banner shown above the services while a query is active
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchBanner {
    /// No active query
    Hidden,
    /// Active query with its number of visible results
    Found {
        /// Visible entries
        count: usize,
        /// Normalised query
        query: String,
    },
}

impl CatalogQuery {
    /// Creates a query showing every entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected tab
    pub fn tab(&self) -> CategoryFilter {
        self.tab
    }

    /// Selects a tab
    ///
    /// Visibility follows the category alone until the next search.
    pub fn set_tab(&mut self, tab: CategoryFilter) {
        self.tab = tab;
        self.scope = Scope::Tab;
    }

    /// Returns the normalised query (empty when no search is active)
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sets the search text (trimmed and lower-cased)
    ///
    /// Visibility follows the query alone, across every category, until the
    /// next tab selection. An empty query shows the whole catalog.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
        self.scope = Scope::Search;
    }

    /// Returns true while a non-empty search decides visibility
    pub fn is_searching(&self) -> bool {
        self.scope == Scope::Search && !self.query.is_empty()
    }

    /// Returns true if the entry passes the tab filter
    pub fn admits_tab(&self, entry: &CatalogEntry) -> bool {
        self.tab.admits(entry.category)
    }

    /// Returns true if the entry matches the search text
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, entry: &CatalogEntry) -> bool {
        self.query.is_empty() || entry.search_text().contains(&self.query)
    }

    /// Returns true if the entry is visible
    ///
    /// The most recent action wins: a tab filters by category, a search by
    /// text.
    pub fn is_visible(&self, entry: &CatalogEntry) -> bool {
        match self.scope {
            Scope::Tab => self.admits_tab(entry),
            Scope::Search => self.matches_query(entry),
        }
    }

    /// Counts entries passing the tab filter (the "Showing N ..." label)
    pub fn tab_count(&self, catalog: &[CatalogEntry]) -> usize {
        catalog.iter().filter(|entry| self.admits_tab(entry)).count()
    }

    /// Counts visible entries
    pub fn visible_count(&self, catalog: &[CatalogEntry]) -> usize {
        catalog.iter().filter(|entry| self.is_visible(entry)).count()
    }

    /// Returns the count label shown under the tabs
    pub fn count_label(&self, catalog: &[CatalogEntry]) -> String {
        format!("Showing {} {}", self.tab_count(catalog), self.tab)
    }

    /// Returns the result banner for the current query
    pub fn banner(&self, catalog: &[CatalogEntry]) -> SearchBanner {
        if !self.is_searching() {
            SearchBanner::Hidden
        } else {
            SearchBanner::Found {
                count: self.visible_count(catalog),
                query: self.query.clone(),
            }
        }
    }

    /// Applies the query to every entry
    ///
    /// Only entries shown by a non-empty search carry marks.
    pub fn view(&self, catalog: &[CatalogEntry]) -> Vec<EntryView> {
        catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let visible = self.is_visible(entry);
                let highlight = visible && self.is_searching();

                let (title, description) = if highlight {
                    (
                        highlight_first(&entry.title, &self.query),
                        highlight_first(&entry.description, &self.query),
                    )
                } else {
                    (
                        vec![Span::Plain(entry.title.clone())],
                        vec![Span::Plain(entry.description.clone())],
                    )
                };

                EntryView {
                    index,
                    visible,
                    title,
                    description,
                }
            })
            .collect()
    }
}

/// Wraps the first case-insensitive occurrence of `term` in a `Mark` span
///
/// The original casing of `text` is preserved. If `term` is empty or does
/// not occur, the whole text is returned as one plain span.
pub fn highlight_first(text: &str, term: &str) -> Vec<Span> {
    if term.is_empty() {
        return vec![Span::Plain(text.to_string())];
    }

    let pattern = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => return vec![Span::Plain(text.to_string())],
    };

    let Some(found) = pattern.find(text) else {
        return vec![Span::Plain(text.to_string())];
    };

    let mut spans = Vec::with_capacity(3);
    if found.start() > 0 {
        spans.push(Span::Plain(text[..found.start()].to_string()));
    }
    spans.push(Span::Mark(found.as_str().to_string()));
    if found.end() < text.len() {
        spans.push(Span::Plain(text[found.end()..].to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_preserves_case() {
        let spans = highlight_first("Passport Services", "port");
        assert_eq!(
            spans,
            vec![
                Span::Plain("Pass".to_string()),
                Span::Mark("port".to_string()),
                Span::Plain(" Services".to_string()),
            ]
        );
    }

    #[test]
    fn test_highlight_only_first_occurrence() {
        let spans = highlight_first("tax and more tax", "TAX");
        let marks = spans.iter().filter(|s| matches!(s, Span::Mark(_))).count();
        assert_eq!(marks, 1);
        assert_eq!(spans[0], Span::Mark("tax".to_string()));
    }

    #[test]
    fn test_highlight_escapes_regex_metacharacters() {
        let spans = highlight_first("Form 26AS (annual)", "(annual)");
        assert_eq!(spans[1], Span::Mark("(annual)".to_string()));
    }

    #[test]
    fn test_highlight_no_match() {
        let spans = highlight_first("DigiLocker", "passport");
        assert_eq!(spans, vec![Span::Plain("DigiLocker".to_string())]);
    }
}
