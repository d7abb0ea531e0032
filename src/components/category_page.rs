//! Category Page
//!
//! Recipes of one category, with a search limited to it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RecipeApi;
use crate::components::SearchBox;
use crate::context::use_app_context;
use crate::notify::use_notifier;
use crate::render::{render_recipe_grid, CardOptions};
use crate::search::{SearchScope, SearchView};

#[component]
pub fn CategoryPage(category: String) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (grid, set_grid) = signal(String::new());

    {
        let category = category.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let api = ctx.api();
            let category = category.clone();
            spawn_local(async move {
                match api.category_recipes(&category).await {
                    Ok(recipes) => set_grid.set(render_recipe_grid(&recipes, CardOptions::default())),
                    Err(err) => {
                        log::error!("[CATEGORY] Error loading {:?}: {}", category, err);
                        notifier.error("Грешка при зареждане на рецептите");
                    }
                }
            });
        });
    }

    let on_result = Callback::new(move |view: SearchView| {
        if let SearchView::Recipes(found) = view {
            set_grid.set(render_recipe_grid(&found, CardOptions::default()));
        }
    });

    let placeholder = format!("🔍 Търсене в {}...", category);
    let heading = format!("📂 {}", category);

    view! {
        <a class="btn btn-back" href="/">"← Всички категории"</a>
        <h1 class="category-title">{heading}</h1>
        <SearchBox scope=SearchScope::Category(category) on_result=on_result placeholder=placeholder />
        <div id="recipe-grid" class="recipe-grid" inner_html=move || grid.get()></div>
    }
}
