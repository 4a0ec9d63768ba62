//! Category Selector Component
//!
//! Tab row filtering the media list by category.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_access_token, store_select_category, use_app_store, AppStateStoreFields};

#[component]
pub fn CategorySelector() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let categories = move || {
        ctx.services()
            .category_controller(&store_access_token(&store))
            .categories()
    };
    let selected = move || store.selected_category().get();

    view! {
        <div class="category-selector">
            <button
                class=move || if selected().is_none() { "category-tab active" } else { "category-tab" }
                on:click=move |_| store_select_category(&store, None)
            >
                "전체"
            </button>
            <For
                each=categories
                key=|category| (category.id, category.title.clone())
                children=move |category| {
                    let id = category.id;
                    let is_active = move || selected() == Some(id);
                    view! {
                        <button
                            class=move || if is_active() { "category-tab active" } else { "category-tab" }
                            on:click=move |_| store_select_category(&store, Some(id))
                        >
                            {category.title}
                        </button>
                    }
                }
            />
        </div>
    }
}
