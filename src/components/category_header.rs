//! Category Header Component
//!
//! Add button, delete-mode toggle, bulk delete and the jump to the media page.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;

#[component]
pub fn CategoryHeader(
    is_delete_mode: ReadSignal<bool>,
    set_is_delete_mode: WriteSignal<bool>,
    is_adding: ReadSignal<bool>,
    #[prop(into)] selected_count: Signal<usize>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_navigate: Callback<()>,
) -> impl IntoView {
    let delete_label = Signal::derive(move || format!("삭제 ({})", selected_count.get()));
    let nothing_selected = Signal::derive(move || selected_count.get() == 0);

    view! {
        <div class=move || if is_adding.get() { "category-header adding" } else { "category-header" }>
            <span class="category-header-title">"카테고리"</span>

            <div class="category-header-actions">
                <button class="category-add-btn" on:click=move |_| on_add.run(())>
                    "+"
                </button>
                <button
                    class=move || if is_delete_mode.get() { "category-mode-btn active" } else { "category-mode-btn" }
                    on:click=move |_| set_is_delete_mode.update(|v| *v = !*v)
                >
                    {move || if is_delete_mode.get() { "완료" } else { "편집" }}
                </button>
                <Show when=move || is_delete_mode.get()>
                    <DeleteConfirmButton
                        button_class="category-delete-btn"
                        label=delete_label
                        disabled=nothing_selected
                        on_confirm=on_delete
                    />
                </Show>
                <button class="category-nav-btn" on:click=move |_| on_navigate.run(())>
                    "미디어 관리"
                </button>
            </div>
        </div>
    }
}
