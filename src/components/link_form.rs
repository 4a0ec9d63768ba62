//! Link Form Component
//!
//! Collects the fields of a new link bookmark.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::LinkForm as LinkFormData;
use crate::store::{store_access_token, use_app_store};

#[component]
pub fn LinkForm(#[prop(into)] on_submit: Callback<LinkFormData>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (category, set_category) = signal::<Option<u64>>(None);
    let (link_url, set_link_url) = signal(String::new());
    let (thumbnail_url, set_thumbnail_url) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let categories = move || {
        ctx.services()
            .category_controller(&store_access_token(&store))
            .categories()
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = link_url.get();
        if url.trim().is_empty() { return; }
        on_submit.run(LinkFormData {
            category: category.get(),
            link_url: url,
            thumbnail_url: thumbnail_url.get(),
            title: title.get(),
            description: description.get(),
        });
    };

    view! {
        <form class="link-form" on:submit=submit>
            <label for="link-category">"카테고리"</label>
            <select
                id="link-category"
                on:change=move |ev| set_category.set(event_target_value(&ev).parse().ok())
            >
                <option value="">"선택 안 함"</option>
                {move || categories().into_iter().map(|c| view! {
                    <option value=c.id.to_string()>{c.title}</option>
                }).collect_view()}
            </select>

            <label for="link-url">"링크 URL*"</label>
            <input
                id="link-url"
                type="url"
                prop:value=move || link_url.get()
                on:input=move |ev| set_link_url.set(event_target_value(&ev))
            />

            <label for="link-thumbnail">"썸네일 URL"</label>
            <input
                id="link-thumbnail"
                type="url"
                prop:value=move || thumbnail_url.get()
                on:input=move |ev| set_thumbnail_url.set(event_target_value(&ev))
            />

            <label for="link-title">"제목"</label>
            <input
                id="link-title"
                type="text"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <label for="link-description">"설명"</label>
            <input
                id="link-description"
                type="text"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />

            <button type="submit">"저장"</button>
        </form>
    }
}
