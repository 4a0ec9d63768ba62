//! Modal Component

use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop; clicking the backdrop closes it
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    width: u32,
    height: u32,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                style=format!("width: {}px; height: {}px;", width, height)
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
