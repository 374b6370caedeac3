use std::collections::HashSet;

use log::debug;

use crate::client::MealApi;
use crate::error::FetchError;
use crate::model::Meal;
use crate::vocabulary::build_vocabulary;

/// Identifies one issued fetch. Tickets are handed out in increasing
/// order and only the most recently issued one may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Outcome of applying a completed fetch to the browser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The result came from the newest fetch and was applied.
    Fresh,
    /// A newer fetch was issued in the meantime; the result was discarded.
    Stale,
}

/// Reconciles search results, the full catalog and the selected area
/// filters into the single list that should be visible.
///
/// All state is owned by one instance and mutated only by completed
/// fetches and toggle/reset calls; there is no internal locking. The
/// catalog from the last unscoped fetch is retained separately from any
/// search-scoped set so that `reset` always returns to the full listing.
pub struct MealBrowser<C> {
    api: C,
    /// Last successful unscoped fetch; the reset target.
    catalog: Vec<Meal>,
    /// Current base set, either the catalog or the last search result.
    all_meals: Vec<Meal>,
    visible_meals: Vec<Meal>,
    filter_categories: Vec<String>,
    selected_filters: HashSet<String>,
    generation: u64,
}

impl<C: MealApi> MealBrowser<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            catalog: Vec::new(),
            all_meals: Vec::new(),
            visible_meals: Vec::new(),
            filter_categories: Vec::new(),
            selected_filters: HashSet::new(),
            generation: 0,
        }
    }

    /// The list the rendering layer should display.
    pub fn visible_meals(&self) -> &[Meal] {
        &self.visible_meals
    }

    /// The base set the current view was derived from.
    pub fn all_meals(&self) -> &[Meal] {
        &self.all_meals
    }

    /// Sorted, deduplicated area values of the current base set.
    pub fn filter_categories(&self) -> &[String] {
        &self.filter_categories
    }

    pub fn selected_filters(&self) -> &HashSet<String> {
        &self.selected_filters
    }

    /// Fetches the unscoped listing and installs it as the catalog.
    ///
    /// On failure the current state is left untouched and the error is
    /// returned for the caller to display.
    pub async fn fetch_all(&mut self) -> Result<(), FetchError> {
        let ticket = self.issue_ticket();
        let meals = self.api.search(None).await?;
        self.apply_catalog(ticket, meals);
        Ok(())
    }

    /// Runs a search scoped to `text`.
    ///
    /// An empty (or all-whitespace) term is a full reset back to the
    /// retained catalog, without a network call. Otherwise the scoped
    /// result replaces the base set and is shown unfiltered; existing
    /// selections stay dormant until the next explicit toggle.
    pub async fn search(&mut self, text: &str) -> Result<(), FetchError> {
        if text.trim().is_empty() {
            self.reset();
            return Ok(());
        }

        let ticket = self.issue_ticket();
        let meals = self.api.search(Some(text)).await?;
        self.apply_search(ticket, meals);
        Ok(())
    }

    /// Flips membership of `category` in the selected filters and
    /// recomputes the visible list from the current base set.
    pub fn toggle_filter(&mut self, category: &str) {
        if !self.selected_filters.remove(category) {
            self.selected_filters.insert(category.to_string());
        }
        self.recompute_visible();
    }

    /// Clears all selections and restores the last unscoped fetch
    /// result, discarding any search-scoped base set.
    pub fn reset(&mut self) {
        // Supersede any in-flight fetch so a late completion cannot
        // overwrite the restored state
        self.generation += 1;
        self.selected_filters.clear();
        self.all_meals = self.catalog.clone();
        self.visible_meals = self.catalog.clone();
        self.filter_categories = build_vocabulary(&self.catalog);
    }

    pub fn cancel_search(&mut self) {
        self.reset();
    }

    /// Issues a ticket for a fetch about to be started, superseding any
    /// ticket issued earlier.
    pub fn issue_ticket(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Applies a completed scoped fetch. A stale ticket leaves the
    /// state untouched.
    pub fn apply_search(&mut self, ticket: FetchTicket, meals: Vec<Meal>) -> Applied {
        if ticket.0 != self.generation {
            debug!("discarding stale search result (ticket {})", ticket.0);
            return Applied::Stale;
        }

        self.all_meals = meals;
        self.filter_categories = build_vocabulary(&self.all_meals);
        // Search results are shown unfiltered; selections persist but
        // are not reapplied until the next toggle
        self.visible_meals = self.all_meals.clone();
        Applied::Fresh
    }

    /// Applies a completed unscoped fetch, replacing the catalog and
    /// the current base set. A stale ticket leaves the state untouched.
    pub fn apply_catalog(&mut self, ticket: FetchTicket, meals: Vec<Meal>) -> Applied {
        if ticket.0 != self.generation {
            debug!("discarding stale catalog result (ticket {})", ticket.0);
            return Applied::Stale;
        }

        self.catalog = meals.clone();
        self.all_meals = meals;
        self.filter_categories = build_vocabulary(&self.all_meals);
        self.visible_meals = self.all_meals.clone();
        Applied::Fresh
    }

    fn recompute_visible(&mut self) {
        if self.selected_filters.is_empty() {
            self.visible_meals = self.all_meals.clone();
        } else {
            self.visible_meals = self
                .all_meals
                .iter()
                .filter(|meal| self.selected_filters.contains(&meal.area))
                .cloned()
                .collect();
        }
    }
}
