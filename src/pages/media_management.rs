//! Media Management Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CategorySelector, LinkComposer, MediaListContainer, Modal};
use crate::context::use_app_context;
use crate::messages;
use crate::store::{store_access_token, store_set_media_modal, use_app_store, AppStateStoreFields};

#[component]
pub fn MediaManagementPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        let token = store_access_token(&store);
        let services = ctx.services();
        let categories = services.category_controller(&token);
        let links = services.link_creator(&token);
        spawn_local(async move {
            let _ = categories.refresh().await;
            let _ = links.refresh().await;
        });
    });

    let close_modal = Callback::new(move |_: ()| store_set_media_modal(&store, false));

    view! {
        <div class="media-container">
            <CategorySelector />
            <MediaListContainer />
            <Show when=move || store.media_modal_open().get()>
                <Modal
                    title=messages::MEDIA_MODAL_TITLE
                    width=940
                    height=640
                    on_close=close_modal
                >
                    <div class="modal-content-center">
                        <LinkComposer />
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
