//! Category List Component
//!
//! One editable row per category; checkboxes in delete mode.

use leptos::prelude::*;

use crate::controllers::SelectedIds;
use crate::models::Category;

/// Single category row with inline title editing
#[component]
fn CategoryRow(
    category: Category,
    is_delete_mode: ReadSignal<bool>,
    selected: RwSignal<SelectedIds>,
    failed: ReadSignal<Vec<u64>>,
    focus_id: RwSignal<Option<u64>>,
    on_update: Callback<(u64, String)>,
) -> impl IntoView {
    let id = category.id;
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    // Focus the row that was just added
    Effect::new(move |_| {
        if focus_id.get() == Some(id) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                focus_id.set(None);
            }
        }
    });

    let row_class = move || {
        if failed.get().contains(&id) {
            "category-row delete-failed"
        } else {
            "category-row"
        }
    };

    view! {
        <li class=row_class>
            <Show when=move || is_delete_mode.get()>
                <input
                    type="checkbox"
                    class="category-check"
                    id=id.to_string()
                    prop:checked=move || selected.get().contains(id)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        selected.update(|s| s.toggle(id, checked));
                    }
                />
            </Show>
            <input
                type="text"
                class="category-title-input"
                placeholder="카테고리 이름"
                node_ref=input_ref
                prop:value=category.title.clone()
                on:change=move |ev| on_update.run((id, event_target_value(&ev)))
            />
        </li>
    }
}

#[component]
pub fn CategoryListContents(
    #[prop(into)] categories: Signal<Vec<Category>>,
    is_delete_mode: ReadSignal<bool>,
    selected: RwSignal<SelectedIds>,
    failed: ReadSignal<Vec<u64>>,
    focus_id: RwSignal<Option<u64>>,
    #[prop(into)] on_update: Callback<(u64, String)>,
) -> impl IntoView {
    view! {
        <ul class="category-list">
            <For
                each=move || categories.get()
                // Re-mount on title change so server-side renames show up
                key=|category| (category.id, category.title.clone())
                children=move |category| {
                    view! {
                        <CategoryRow
                            category=category
                            is_delete_mode=is_delete_mode
                            selected=selected
                            failed=failed
                            focus_id=focus_id
                            on_update=on_update
                        />
                    }
                }
            />
        </ul>

        {move || if categories.get().is_empty() {
            view! { <div class="no-categories-message">"카테고리가 없습니다."</div> }.into_any()
        } else {
            view! { <div></div> }.into_any()
        }}
    }
}
