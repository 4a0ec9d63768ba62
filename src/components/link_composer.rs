//! Link Composer Component
//!
//! Shows the link form, then the created link with a transient "saved" banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LinkForm, LinkView};
use crate::context::use_app_context;
use crate::controllers::CompletionBanner;
use crate::messages;
use crate::models::{LinkForm as LinkFormData, LinkSummary};
use crate::store::{store_access_token, use_app_store};

#[component]
pub fn LinkComposer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let banner_ms = ctx.config().banner_ms;

    let created = RwSignal::new(None::<LinkSummary>);
    let banner = RwSignal::new(CompletionBanner::default());

    // Pending timers find the banner disposed and do nothing
    on_cleanup(move || {
        let _ = banner.try_update(|b| b.cancel());
    });

    let on_submit = Callback::new(move |form: LinkFormData| {
        let creator = ctx.services().link_creator(&store_access_token(&store));
        spawn_local(async move {
            let Ok(summary) = creator.create(&form).await else {
                return;
            };
            let id = summary.id;
            let _ = created.try_set(Some(summary));

            if let Some(ticket) = banner.try_update(|b| b.trigger()) {
                spawn_local(async move {
                    TimeoutFuture::new(banner_ms).await;
                    let _ = banner.try_update(|b| b.expire(ticket));
                });
            }

            // Errors are logged by the creator
            let _ = creator.attach_detail(id).await;
        });
    });

    view! {
        <div class="link-composer">
            {move || match created.get() {
                Some(summary) => view! {
                    <LinkView link_id=summary.id />
                    <Show when=move || banner.get().is_visible()>
                        <div class="message-box">
                            <p class="message-text">{messages::LINK_SAVED}</p>
                        </div>
                    </Show>
                }.into_any(),
                None => view! { <LinkForm on_submit=on_submit /> }.into_any(),
            }}
        </div>
    }
}
