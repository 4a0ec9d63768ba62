//! Media List Component
//!
//! Cached links in the selected category, plus the button opening the link modal.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controllers::links_in_category;
use crate::models::LinkDetail;
use crate::store::{store_access_token, store_set_media_modal, use_app_store, AppStateStoreFields};

#[component]
fn MediaCard(link: LinkDetail) -> impl IntoView {
    let url = link.link_url();
    let thumbnail = if url.thumbnail.is_empty() {
        view! { <div class="media-card-thumbnail empty"></div> }.into_any()
    } else {
        view! { <img class="media-card-thumbnail" src=url.thumbnail alt="" /> }.into_any()
    };

    view! {
        <a class="media-card" href=url.display target="_blank">
            {thumbnail}
            <span class="media-card-title">{link.title}</span>
            <span class="media-card-description">{link.description}</span>
        </a>
    }
}

#[component]
pub fn MediaListContainer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let links = move || {
        let all = ctx
            .services()
            .link_creator(&store_access_token(&store))
            .links();
        links_in_category(&all, store.selected_category().get())
    };

    view! {
        <div class="media-list-container">
            <div class="media-list-header">
                <span class="media-list-count">{move || format!("{}개", links().len())}</span>
                <button class="media-add-btn" on:click=move |_| store_set_media_modal(&store, true)>
                    "링크 추가"
                </button>
            </div>

            <div class="media-list">
                <For
                    each=links
                    key=|link| link.id
                    children=move |link| view! { <MediaCard link=link /> }
                />
            </div>

            {move || if links().is_empty() {
                view! { <div class="no-media-message">"저장된 링크가 없습니다."</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
