//! Link View Component
//!
//! Preview of a created link read from the link cache.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_access_token, use_app_store};

#[component]
pub fn LinkView(link_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let detail = move || {
        ctx.services()
            .link_creator(&store_access_token(&store))
            .cached_detail(link_id)
    };

    view! {
        <div class="link-view">
            {move || match detail() {
                Some(link) => {
                    let url = link.link_url();
                    let thumbnail = (!url.thumbnail.is_empty()).then(|| view! {
                        <img class="link-thumbnail" src=url.thumbnail.clone() alt="" />
                    });
                    view! {
                        {thumbnail}
                        <div class="link-view-body">
                            <h3 class="link-view-title">{link.title}</h3>
                            <p class="link-view-description">{link.description}</p>
                            <a class="link-view-url" href=url.display.clone() target="_blank">
                                {url.display.clone()}
                            </a>
                        </div>
                    }.into_any()
                }
                None => view! { <p class="link-view-loading">"불러오는 중..."</p> }.into_any(),
            }}
        </div>
    }
}
