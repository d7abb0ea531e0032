//! Recipe Page
//!
//! One recipe in full, with its instructions readable aloud.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::MSG_LOAD_FAILED;
use crate::api::RecipeApi;
use crate::context::use_app_context;
use crate::models::Recipe;
use crate::notify::use_notifier;
use crate::render::category_href;
use crate::speech::ReadAloudButton;

#[component]
pub fn RecipePage(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (recipe, set_recipe) = signal::<Option<Recipe>>(None);
    let (failed, set_failed) = signal(false);

    spawn_local(async move {
        match ctx.api().get_recipe(id).await {
            Ok(loaded) => {
                log::debug!("[RECIPE] Loaded {} ({})", loaded.id, loaded.name);
                set_recipe.set(Some(loaded));
            }
            Err(err) => {
                log::error!("[RECIPE] Error loading {}: {}", id, err);
                set_failed.set(true);
                notifier.error(MSG_LOAD_FAILED);
            }
        }
    });

    let speech = ctx.config().speech;

    view! {
        <a class="btn btn-back" href="/">"← Назад"</a>
        {move || match recipe.get() {
            Some(recipe) => {
                let href = category_href(&recipe.category);
                view! {
                    <article class="recipe-detail">
                        <h1>{recipe.name.clone()}</h1>
                        <a class="recipe-category" href=href>{format!("📂 {}", recipe.category)}</a>
                        <section class="recipe-section">
                            <h2>"Съставки"</h2>
                            <p class="recipe-ingredients">{recipe.ingredients.clone()}</p>
                        </section>
                        <section class="recipe-section">
                            <h2>"Начин на приготвяне"</h2>
                            <ReadAloudButton text=recipe.instructions.clone() settings=speech.clone() />
                            <p class="recipe-instructions">{recipe.instructions.clone()}</p>
                        </section>
                    </article>
                }
                .into_any()
            }
            None if failed.get() => view! { <div class="empty-state">{MSG_LOAD_FAILED}</div> }.into_any(),
            None => view! { <div class="loading">"Зареждане..."</div> }.into_any(),
        }}
    }
}
