//! Service catalog controller
//!
//! # Responsibilities
//!
//! - Tab filter and visible-count label
//! - Debounced text search with highlighting and result banner
//! - Statistic counters that animate once revealed
//!
//! Search input is not applied immediately: each keystroke replaces the
//! pending debounce timer and only the last text is searched.

use std::time::Duration;

use crate::core::{
    catalog::{default_catalog, CatalogQuery, EntryView, SearchBanner},
    counter::CounterAnimation,
    types::{CatalogEntry, CategoryFilter},
};
use crate::ui::{
    page::{PageTimer, Timers},
    scheduler::{TimerId, TimerSlot},
};

/// Statistics shown under the catalog
pub const DEFAULT_STATS: [&str; 4] = ["1,500+", "25M+", "36", "99%"];

#[derive(Debug)]
struct Statistic {
    text: String,
    animation: Option<CounterAnimation>,
    revealed_at: Option<Duration>,
}

/// Controller for the services page
#[derive(Debug)]
pub struct ServicesController {
    catalog: Vec<CatalogEntry>,
    query: CatalogQuery,
    pending_query: Option<String>,
    debounce: TimerSlot,
    debounce_delay: Duration,
    stats: Vec<Statistic>,
}

impl ServicesController {
    /// Creates a controller over `catalog`
    pub fn new(catalog: Vec<CatalogEntry>, debounce_delay: Duration) -> Self {
        Self {
            catalog,
            query: CatalogQuery::new(),
            pending_query: None,
            debounce: TimerSlot::new(),
            debounce_delay,
            stats: DEFAULT_STATS
                .iter()
                .map(|text| Statistic {
                    text: text.to_string(),
                    animation: CounterAnimation::parse(text),
                    revealed_at: None,
                })
                .collect(),
        }
    }

    /// Creates a controller over the built-in catalog
    pub fn with_default_catalog(debounce_delay: Duration) -> Self {
        Self::new(default_catalog(), debounce_delay)
    }

    /// The catalog
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// Finds an entry by exact title
    pub fn entry(&self, title: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|e| e.title == title)
    }

    /// Selected tab
    pub fn tab(&self) -> CategoryFilter {
        self.query.tab()
    }

    /// Tab button clicked
    pub fn select_tab(&mut self, tab: CategoryFilter) {
        self.query.set_tab(tab);
        tracing::debug!(%tab, "catalog tab selected");
    }

    /// Text typed into the catalog search
    pub fn search_input(&mut self, text: &str, timers: &mut Timers) {
        self.pending_query = Some(text.to_string());
        self.debounce
            .arm(timers, self.debounce_delay, PageTimer::SearchDebounce);
    }

    /// Debounce timer fired: run the latest search
    pub fn on_debounce(&mut self, id: TimerId) {
        if !self.debounce.holds(id) {
            return;
        }
        self.debounce.fired(id);

        if let Some(text) = self.pending_query.take() {
            self.apply_search(&text);
        }
    }

    /// Runs a search immediately, bypassing the debounce
    pub fn apply_search(&mut self, text: &str) {
        self.query.set_query(text);
        tracing::debug!(
            query = self.query.query(),
            visible = self.visible_count(),
            "catalog search applied"
        );
    }

    /// Search text currently applied (normalised)
    pub fn applied_query(&self) -> &str {
        self.query.query()
    }

    /// Entry views under the current tab or search
    pub fn view(&self) -> Vec<EntryView> {
        self.query.view(&self.catalog)
    }

    /// Number of visible entries
    pub fn visible_count(&self) -> usize {
        self.query.visible_count(&self.catalog)
    }

    /// "Showing N ..." label
    pub fn count_label(&self) -> String {
        self.query.count_label(&self.catalog)
    }

    /// Result banner
    pub fn banner(&self) -> SearchBanner {
        self.query.banner(&self.catalog)
    }

    /// Statistics scrolled into view at virtual time `now`
    ///
    /// Each counter starts once; later calls do not restart it.
    pub fn reveal_stats(&mut self, now: Duration) {
        for stat in &mut self.stats {
            stat.revealed_at.get_or_insert(now);
        }
    }

    /// Statistic display strings at virtual time `now`
    ///
    /// Unrevealed or unparsable statistics show their original text.
    pub fn stat_displays(&self, now: Duration) -> Vec<String> {
        self.stats
            .iter()
            .map(|stat| match (&stat.animation, stat.revealed_at) {
                (Some(animation), Some(start)) => animation.display_at(now.saturating_sub(start)),
                _ => stat.text.clone(),
            })
            .collect()
    }
}
