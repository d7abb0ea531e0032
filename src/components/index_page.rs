//! Index Page
//!
//! Browse by category, or search across all recipes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RecipeApi;
use crate::components::SearchBox;
use crate::context::use_app_context;
use crate::models::CategorySummary;
use crate::render::{render_category_grid, render_recipe_grid, CardOptions};
use crate::search::{SearchScope, SearchView};

#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = use_app_context();
    let (categories, set_categories) = signal(Vec::<CategorySummary>::new());
    // Some(markup) while showing flat search results
    let (results, set_results) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_categories().await {
                Ok(loaded) => {
                    log::debug!("[INDEX] Loaded {} categories", loaded.len());
                    set_categories.set(loaded);
                }
                Err(err) => log::error!("[INDEX] Error loading categories: {}", err),
            }
        });
    });

    let on_result = Callback::new(move |view: SearchView| match view {
        SearchView::Categories => set_results.set(None),
        SearchView::Recipes(found) => {
            set_results.set(Some(render_recipe_grid(&found, CardOptions { show_category: true })))
        }
    });

    view! {
        <section class="hero">
            <h1>"Рецепти"</h1>
            <SearchBox
                scope=SearchScope::Global
                on_result=on_result
                placeholder="🔍 Търсене по име или съставки..."
                clearable=true
            />
        </section>

        <section id="search-results" style:display=move || if results.get().is_some() { "block" } else { "none" }>
            <h2>"Резултати от търсенето"</h2>
            <div id="search-results-grid" class="recipe-grid" inner_html=move || results.get().unwrap_or_default()></div>
        </section>

        <section id="categories-view" style:display=move || if results.get().is_none() { "block" } else { "none" }>
            <div class="category-grid" inner_html=move || render_category_grid(&categories.get())></div>
        </section>
    }
}
