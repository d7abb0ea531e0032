//! Recipe Form Panel
//!
//! Create/edit form of the admin page. State lives in a `RecipeForm` signal
//! owned by the page so the recipe list can switch it into edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::admin::{submit, RecipeForm, CANCEL_LABEL};
use crate::context::use_app_context;
use crate::models::NEW_CATEGORY_OPTION;
use crate::notify::use_notifier;
use crate::store::use_catalog_store;

pub const FORM_ID: &str = "recipe-form";

#[component]
pub fn RecipeFormPanel(form: RwSignal<RecipeForm>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            match submit(&api, &current).await {
                Ok(done) => {
                    log::info!("[ADMIN] {:?} {:?}", done, current.name.trim());
                    notifier.success(done.message());
                    form.set(RecipeForm::default());
                    ctx.reload();
                }
                Err(err) => {
                    log::warn!("[ADMIN] Submit failed: {}", err);
                    notifier.error(err.user_message());
                }
            }
        });
    };

    view! {
        <form id=FORM_ID class="recipe-form" on:submit=on_submit>
            <h2>{move || if form.with(|f| f.is_editing()) { "Редактиране на рецепта" } else { "Нова рецепта" }}</h2>

            <label for="recipe-name">"Име"</label>
            <input
                id="recipe-name"
                type="text"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />

            <label for="recipe-category">"Категория"</label>
            <CategorySelect form=form />

            <label for="recipe-ingredients">"Съставки"</label>
            <textarea
                id="recipe-ingredients"
                rows="5"
                prop:value=move || form.with(|f| f.ingredients.clone())
                on:input=move |ev| form.update(|f| f.ingredients = event_target_value(&ev))
            ></textarea>

            <label for="recipe-instructions">"Начин на приготвяне"</label>
            <textarea
                id="recipe-instructions"
                rows="8"
                prop:value=move || form.with(|f| f.instructions.clone())
                on:input=move |ev| form.update(|f| f.instructions = event_target_value(&ev))
            ></textarea>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">{move || form.with(|f| f.submit_label())}</button>
                <Show when=move || form.with(|f| f.is_editing())>
                    <button type="button" class="btn btn-secondary" on:click=move |_| form.update(RecipeForm::reset)>
                        {CANCEL_LABEL}
                    </button>
                </Show>
            </div>
        </form>
    }
}

/// Existing categories plus "new category", which reveals a text input
#[component]
fn CategorySelect(form: RwSignal<RecipeForm>) -> impl IntoView {
    let store = use_catalog_store();
    let options = Memo::new(move |_| store.with(|s| s.category_options()));

    view! {
        <select
            id="recipe-category"
            on:change=move |ev| form.update(|f| f.category.select(&event_target_value(&ev)))
        >
            <option value="" prop:selected=move || form.with(|f| f.category.selected.is_empty())>
                "-- Изберете категория --"
            </option>
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| {
                    let value = option.clone();
                    let label = option.clone();
                    let selected = move || form.with(|f| f.category.selected == value);
                    view! { <option value=option prop:selected=selected>{label}</option> }
                }
            />
            <option
                value=NEW_CATEGORY_OPTION
                prop:selected=move || form.with(|f| f.category.selected == NEW_CATEGORY_OPTION)
            >
                "+ Нова категория"
            </option>
        </select>
        <Show when=move || form.with(|f| f.category.custom_visible)>
            <input
                id="recipe-category-new"
                type="text"
                placeholder="Име на новата категория"
                prop:value=move || form.with(|f| f.category.custom.clone())
                on:input=move |ev| form.update(|f| f.category.custom = event_target_value(&ev))
            />
        </Show>
    }
}
