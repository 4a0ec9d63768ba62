//! Category Page
//!
//! Wires the category controller into the header and list components.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CategoryHeader, CategoryListContents};
use crate::context::{use_app_context, Page};
use crate::controllers::{AddOutcome, CategoryController, SelectedIds};
use crate::messages;
use crate::store::{store_access_token, use_app_store};

#[component]
pub fn CategoryPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Unguarded UI modes: both may be on at once
    let (is_delete_mode, set_is_delete_mode) = signal(false);
    let (is_adding, set_is_adding) = signal(false);
    let selected = RwSignal::new(SelectedIds::default());
    let (failed, set_failed) = signal(Vec::<u64>::new());
    let focus_id = RwSignal::new(None::<u64>);

    let controller = move || -> CategoryController {
        ctx.services().category_controller(&store_access_token(&store))
    };

    let categories = Signal::derive(move || controller().categories());
    let selected_count = Signal::derive(move || selected.get().len());

    // Load on mount and whenever the login changes
    Effect::new(move |_| {
        let controller = controller();
        spawn_local(async move {
            let _ = controller.refresh().await;
        });
    });

    let on_add = Callback::new(move |_: ()| {
        let controller = controller();
        set_is_adding.set(true);
        spawn_local(async move {
            match controller.add().await {
                AddOutcome::Added(category) => {
                    let _ = focus_id.try_set(Some(category.id));
                    // Revalidate against the server copy
                    let _ = controller.refresh().await;
                }
                AddOutcome::LimitReached => {
                    let _ = window().alert_with_message(&messages::category_limit_alert(controller.limit()));
                }
                AddOutcome::Failed => {}
            }
            let _ = set_is_adding.try_set(false);
        });
    });

    let on_update = Callback::new(move |(id, text): (u64, String)| {
        let controller = controller();
        spawn_local(async move {
            let _ = controller.update(id, &text).await;
        });
    });

    let on_delete = Callback::new(move |_: ()| {
        let ids = selected.get_untracked().ids().to_vec();
        if ids.is_empty() { return; }
        let controller = controller();
        spawn_local(async move {
            let report = controller.delete(&ids).await;
            let _ = selected.try_update(|s| s.retain_failed(&report));
            let _ = set_failed.try_set(report.failed_ids());
            if report.is_complete() {
                let _ = set_is_delete_mode.try_set(false);
            }
        });
    });

    let on_navigate = Callback::new(move |_: ()| ctx.navigate(Page::Media));

    view! {
        <section class="category-page">
            <CategoryHeader
                is_delete_mode=is_delete_mode
                set_is_delete_mode=set_is_delete_mode
                is_adding=is_adding
                selected_count=selected_count
                on_add=on_add
                on_delete=on_delete
                on_navigate=on_navigate
            />
            <CategoryListContents
                categories=categories
                is_delete_mode=is_delete_mode
                selected=selected
                failed=failed
                focus_id=focus_id
                on_update=on_update
            />
        </section>
    }
}
