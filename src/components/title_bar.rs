//! Title Bar Component
//!
//! App title and navigation between the top-level screens.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

const PAGES: &[(Page, &str)] = &[
    (Page::Categories, "카테고리"),
    (Page::Media, "미디어"),
    (Page::Template, "템플릿"),
];

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="titlebar">
            <span class="titlebar-title">"Media Manager"</span>
            <nav class="titlebar-nav">
                {PAGES.iter().map(|(page, label)| {
                    let page = *page;
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "titlebar-btn active" } else { "titlebar-btn" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
