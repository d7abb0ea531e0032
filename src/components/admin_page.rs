//! Admin Page
//!
//! Recipe form plus the filterable list of all recipes. Owns the catalog
//! store; every change bumps the reload trigger and the lists are re-fetched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::admin::{
    delete_recipe, edit_form, Deletion, FormMode, RecipeForm, MSG_CONNECTION, MSG_DELETED, MSG_DELETE_FAILED,
    MSG_LOAD_FAILED,
};
use crate::api::RecipeApi;
use super::recipe_form_panel::{RecipeFormPanel, FORM_ID};
use crate::components::SearchBox;
use crate::context::use_app_context;
use crate::dialog::BrowserConfirm;
use crate::models::Recipe;
use crate::notify::use_notifier;
use crate::search::{SearchScope, SearchView};
use crate::store::{use_catalog_store, CatalogState, CatalogStateStoreFields, CatalogStore};

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: CatalogStore = Store::new(CatalogState::default());
    provide_context(store);

    let form = RwSignal::new(RecipeForm::default());

    // Re-fetch both lists whenever something changed; the filter box empties
    // itself on the same trigger so it never disagrees with the full list
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.search("").await {
                Ok(recipes) => store.recipes().set(recipes),
                Err(err) => log::error!("[ADMIN] Error loading recipes: {}", err),
            }
            match api.list_categories().await {
                Ok(categories) => store.categories().set(categories),
                Err(err) => log::error!("[ADMIN] Error loading categories: {}", err),
            }
        });
    });

    let on_filter = Callback::new(move |view: SearchView| {
        if let SearchView::Recipes(found) = view {
            store.recipes().set(found);
        }
    });

    view! {
        <h1>"Администрация"</h1>
        <a class="btn btn-secondary" href="/admin/categories">"📂 Управление на категории"</a>
        <RecipeFormPanel form=form />
        <section class="admin-list">
            <h2>"Всички рецепти"</h2>
            <SearchBox
                scope=SearchScope::All
                on_result=on_filter
                placeholder="🔍 Филтриране на рецептите..."
                reset_on=ctx.reload_trigger
            />
            <AdminRecipeList form=form />
        </section>
    }
}

fn scroll_form_into_view() {
    let Some(element) = document().get_element_by_id(FORM_ID) else {
        log::warn!("[ADMIN] #{} not found", FORM_ID);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
fn AdminRecipeList(form: RwSignal<RecipeForm>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let store = use_catalog_store();

    let on_edit = move |id: u32| {
        let options = store.with_untracked(|s| s.category_options());
        let api = ctx.api();
        spawn_local(async move {
            match edit_form(&api, id, &options).await {
                Ok(loaded) => {
                    form.set(loaded);
                    scroll_form_into_view();
                }
                Err(err) => {
                    log::error!("[ADMIN] Error loading recipe {}: {}", id, err);
                    notifier.error(MSG_LOAD_FAILED);
                }
            }
        });
    };

    let on_delete = move |recipe: Recipe| {
        let api = ctx.api();
        spawn_local(async move {
            match delete_recipe(&api, &BrowserConfirm, recipe.id, &recipe.name).await {
                Ok(Deletion::Deleted) => {
                    log::info!("[ADMIN] Deleted recipe {}", recipe.id);
                    notifier.success(MSG_DELETED);
                    // Deleting the recipe being edited leaves nothing to update
                    if form.with_untracked(|f| f.mode) == FormMode::Edit(recipe.id) {
                        form.set(RecipeForm::default());
                    }
                    ctx.reload();
                }
                Ok(Deletion::Declined) => {}
                Err(err) => {
                    log::warn!("[ADMIN] Delete failed: {}", err);
                    notifier.error(err.user_message(MSG_DELETE_FAILED, MSG_CONNECTION));
                }
            }
        });
    };

    view! {
        <Show
            when=move || !store.recipes().with(|r| r.is_empty())
            fallback=|| view! { <p class="empty-list">"Все още няма рецепти"</p> }
        >
            <ul class="admin-recipe-list">
                <For
                    each=move || store.recipes().get()
                    key=|recipe| (recipe.id, recipe.name.clone(), recipe.category.clone())
                    children=move |recipe| {
                        let id = recipe.id;
                        let name = recipe.name.clone();
                        let category = recipe.category.clone();
                        view! {
                            <li class="admin-recipe-item">
                                <span class="admin-recipe-name">{name}</span>
                                <span class="category-badge">{category}</span>
                                <span class="admin-recipe-actions">
                                    <button class="btn btn-edit" on:click=move |_| on_edit(id)>"✏️ Редактирай"</button>
                                    <button class="btn btn-delete" on:click=move |_| on_delete(recipe.clone())>
                                        "🗑️ Изтрий"
                                    </button>
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
