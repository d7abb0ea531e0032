//! Category Admin Page
//!
//! Lists categories with counts; user-created ones can be renamed (modal) or
//! deleted. Both actions reload the whole page on success.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::{
    delete_category, is_editable, rename_category, CategoryOutcome, RenameDraft, RenameOutcome,
    MSG_CATEGORY_DELETED, MSG_CATEGORY_DELETE_FAILED, MSG_RENAMED, MSG_RENAME_FAILED,
};
use crate::api::RecipeApi;
use crate::context::use_app_context;
use crate::dialog::{reload_page, BrowserConfirm};
use crate::models::CategorySummary;
use crate::notify::use_notifier;
use crate::render::{category_href, recipe_count_label};

#[component]
pub fn CategoryAdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (categories, set_categories) = signal(Vec::<CategorySummary>::new());
    let draft = RwSignal::new(None::<RenameDraft>);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_categories().await {
                Ok(loaded) => set_categories.set(loaded),
                Err(err) => {
                    log::error!("[CATEGORY] Error loading categories: {}", err);
                    notifier.error("Грешка при зареждане на категориите");
                }
            }
        });
    });

    let on_delete = move |summary: CategorySummary| {
        let api = ctx.api();
        spawn_local(async move {
            match delete_category(&api, &BrowserConfirm, &summary.category, summary.count).await {
                Ok(CategoryOutcome::Deleted) => {
                    notifier.success(MSG_CATEGORY_DELETED);
                    reload_page();
                }
                Ok(CategoryOutcome::Declined) => {}
                Err(err) => {
                    log::warn!("[CATEGORY] Delete failed: {}", err);
                    notifier.error(err.user_message(MSG_CATEGORY_DELETE_FAILED));
                }
            }
        });
    };

    view! {
        <a class="btn btn-back" href="/admin">"← Към рецептите"</a>
        <h1>"Категории"</h1>
        <ul class="category-admin-list">
            <For
                each=move || categories.get()
                key=|summary| (summary.category.clone(), summary.count)
                children=move |summary| {
                    let name = summary.category.clone();
                    let editable = is_editable(&name);
                    let rename_target = name.clone();
                    view! {
                        <li class="category-admin-item">
                            <a class="category-admin-name" href=category_href(&name)>{name.clone()}</a>
                            <span class="category-admin-count">{recipe_count_label(summary.count)}</span>
                            <Show when=move || editable>
                                <span class="category-admin-actions">
                                    <button
                                        class="btn btn-edit"
                                        on:click={
                                            let rename_target = rename_target.clone();
                                            move |_| draft.set(Some(RenameDraft::open(&rename_target)))
                                        }
                                    >
                                        "✏️ Преименувай"
                                    </button>
                                    <button
                                        class="btn btn-delete"
                                        on:click={
                                            let summary = summary.clone();
                                            move |_| on_delete(summary.clone())
                                        }
                                    >
                                        "🗑️ Изтрий"
                                    </button>
                                </span>
                            </Show>
                        </li>
                    }
                }
            />
        </ul>
        <RenameModal draft=draft />
    }
}

#[component]
fn RenameModal(draft: RwSignal<Option<RenameDraft>>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let (saving, set_saving) = signal(false);

    let close = move || draft.set(None);

    let on_save = move |_: MouseEvent| {
        let Some(current) = draft.get_untracked() else { return };
        let api = ctx.api();
        set_saving.set(true);
        spawn_local(async move {
            match rename_category(&api, &current).await {
                Ok(RenameOutcome::Unchanged) => close(),
                Ok(RenameOutcome::Renamed) => {
                    notifier.success(MSG_RENAMED);
                    reload_page();
                }
                Err(err) => {
                    log::warn!("[CATEGORY] Rename failed: {}", err);
                    notifier.error(err.user_message(MSG_RENAME_FAILED));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <Show when=move || draft.with(|d| d.is_some())>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Преименуване на категория"</h2>
                    <p class="modal-old-name">
                        "Текущо име: "
                        <strong>{move || draft.with(|d| d.as_ref().map(|d| d.old_name.clone()).unwrap_or_default())}</strong>
                    </p>
                    <input
                        id="category-new-name"
                        type="text"
                        prop:value=move || draft.with(|d| d.as_ref().map(|d| d.new_name.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                if let Some(d) = d {
                                    d.new_name = value;
                                }
                            });
                        }
                    />
                    <div class="form-actions">
                        <button class="btn btn-primary" disabled=move || saving.get() on:click=on_save>
                            "💾 Запази"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| close()>"❌ Отказ"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
