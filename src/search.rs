//! Search Pipeline
//!
//! Keystroke → plan → (debounced) request → records for the renderer.
//! Matching is done by the backend; category pages post-filter its results.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::RecipeApi;
use crate::debounce::{BrowserScheduler, Debouncer, Scheduler};
use crate::error::ApiResult;
use crate::models::Recipe;

/// Where a search box lives, which decides what an empty query means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// Plain list; empty query lists everything
    All,
    /// Index page; empty query goes back to the category view
    Global,
    /// Category page; results limited to this category
    Category(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Show the browse-by-category view, no request
    ShowCategories,
    /// Full recipe list of the category
    ReloadCategory(String),
    /// Backend search for this text
    Query(String),
}

impl SearchPlan {
    /// Plans that run right away instead of waiting for the quiet period
    pub fn is_immediate(&self) -> bool {
        !matches!(self, SearchPlan::Query(_))
    }
}

/// What the view should show once a plan has run
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    Categories,
    Recipes(Vec<Recipe>),
}

pub fn plan(scope: &SearchScope, query: &str) -> SearchPlan {
    if !query.trim().is_empty() {
        return SearchPlan::Query(query.to_string());
    }
    match scope {
        SearchScope::All => SearchPlan::Query(String::new()),
        SearchScope::Global => SearchPlan::ShowCategories,
        SearchScope::Category(name) => SearchPlan::ReloadCategory(name.clone()),
    }
}

pub fn filter_to_category(recipes: Vec<Recipe>, category: &str) -> Vec<Recipe> {
    recipes.into_iter().filter(|r| r.category == category).collect()
}

pub async fn execute<A: RecipeApi + ?Sized>(
    api: &A,
    scope: &SearchScope,
    plan: SearchPlan,
) -> ApiResult<SearchView> {
    match plan {
        SearchPlan::ShowCategories => Ok(SearchView::Categories),
        SearchPlan::ReloadCategory(name) => api.category_recipes(&name).await.map(SearchView::Recipes),
        SearchPlan::Query(query) => {
            let recipes = api.search(&query).await?;
            let recipes = match scope {
                SearchScope::Category(name) => filter_to_category(recipes, name),
                SearchScope::All | SearchScope::Global => recipes,
            };
            log::debug!("[SEARCH] {:?} {:?}: {} results", scope, query, recipes.len());
            Ok(SearchView::Recipes(recipes))
        }
    }
}

/// Marks the input a plan came from. Only the latest input's results may
/// reach the view; requests already in flight are not aborted.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    latest: Rc<Cell<u64>>,
}

impl SearchTicket {
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.generation
    }
}

/// Search box state: its scope, its own debounce timer and the generation of
/// the latest input
pub struct SearchController<S: Scheduler = BrowserScheduler> {
    scope: SearchScope,
    debouncer: Debouncer<S>,
    latest: Rc<Cell<u64>>,
}

impl<S: Scheduler> SearchController<S> {
    pub fn new(scope: SearchScope, scheduler: S, delay_ms: u32) -> Self {
        Self {
            scope,
            debouncer: Debouncer::new(scheduler, delay_ms),
            latest: Rc::new(Cell::new(0)),
        }
    }

    pub fn scope(&self) -> &SearchScope {
        &self.scope
    }

    /// Handle new input text. `run` receives the plan when it is due: right
    /// away for immediate plans, after the quiet period otherwise. A pending
    /// plan is always dropped first, and earlier tickets go stale.
    pub fn input(&mut self, query: &str, run: impl FnOnce(SearchPlan, SearchTicket) + 'static) {
        let next = plan(&self.scope, query);
        let ticket = self.issue();
        if next.is_immediate() {
            self.debouncer.cancel();
            run(next, ticket);
        } else {
            self.debouncer.call(move || run(next, ticket));
        }
    }

    /// Drop the pending plan and invalidate every outstanding ticket
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
        self.issue();
    }

    fn issue(&self) -> SearchTicket {
        let generation = self.latest.get().wrapping_add(1);
        self.latest.set(generation);
        SearchTicket { generation, latest: self.latest.clone() }
    }
}
