//! Template Sub Header Component

use leptos::prelude::*;

use crate::messages;
use crate::store::{store_set_record_card, use_app_store, AppStateStoreFields};

/// Title (seeded from the selected record card) and description fields
#[component]
pub fn TemplateSubHeader() -> impl IntoView {
    let store = use_app_store();
    let (description, set_description) = signal(String::new());

    view! {
        <div class="template-content">
            <label for="template-title">{messages::TEMPLATE_TITLE_LABEL}</label>
            <input
                type="text"
                class="template-input"
                name="template-title"
                id="template-title"
                prop:value=move || store.selected_record_card().get()
                on:input=move |ev| store_set_record_card(&store, event_target_value(&ev))
            />
            <br />
            <label for="template-description">{messages::TEMPLATE_DESCRIPTION_LABEL}</label>
            <input
                type="text"
                class="template-input"
                name="template-description"
                id="template-description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
        </div>
    }
}
