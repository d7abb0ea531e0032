//! Search Box Component
//!
//! Text input driving a `SearchController`. Each box owns its own debounce
//! timer, so boxes on different pages never cancel each other.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::debounce::BrowserScheduler;
use crate::notify::use_notifier;
use crate::search::{self, SearchController, SearchPlan, SearchScope, SearchTicket, SearchView};

pub const MSG_SEARCH_FAILED: &str = "Грешка при търсене на рецепти";

#[component]
pub fn SearchBox(
    scope: SearchScope,
    /// Receives the view to show once a search completes
    #[prop(into)] on_result: Callback<SearchView>,
    #[prop(into)] placeholder: String,
    /// Show a button that empties the box
    #[prop(optional)] clearable: bool,
    /// Empty the box whenever this changes (the owner reloaded its list)
    #[prop(optional)] reset_on: Option<ReadSignal<u32>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let delay = ctx.config().debounce_ms;

    let controller = StoredValue::new_local(SearchController::new(scope.clone(), BrowserScheduler, delay));
    let (query, set_query) = signal(String::new());

    // Runs a due plan; kept free of `controller` since immediate plans run
    // while it is borrowed
    let runner = move || {
        let scope = scope.clone();
        move |plan: SearchPlan, ticket: SearchTicket| {
            let api = ctx.api();
            spawn_local(async move {
                let result = search::execute(&api, &scope, plan).await;
                if !ticket.is_current() {
                    log::debug!("[SEARCH] Dropping superseded result");
                    return;
                }
                match result {
                    Ok(view) => on_result.run(view),
                    Err(err) => {
                        log::error!("[SEARCH] {}", err);
                        notifier.error(MSG_SEARCH_FAILED);
                    }
                }
            });
        }
    };
    let runner = StoredValue::new_local(runner);

    let submit_query = move |text: String| {
        set_query.set(text.clone());
        let run = runner.with_value(|make| make());
        controller.update_value(|c| c.input(&text, run));
    };

    if let Some(trigger) = reset_on {
        Effect::new(move |previous: Option<u32>| {
            let current = trigger.get();
            if previous.is_some() {
                set_query.set(String::new());
                controller.update_value(|c| c.cancel());
            }
            current
        });
    }

    view! {
        <div class="search-container">
            <input
                id="search-input"
                type="search"
                class="search-input"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| submit_query(event_target_value(&ev))
            />
            <Show when=move || clearable && !query.get().is_empty()>
                <button type="button" class="btn btn-clear" on:click=move |_| submit_query(String::new())>
                    "✕"
                </button>
            </Show>
        </div>
    }
}
