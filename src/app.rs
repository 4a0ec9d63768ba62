//! Media Manager Frontend App
//!
//! Root component: builds the services, provides store and context, and
//! switches between the top-level pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TitleBar;
use crate::config::AppConfig;
use crate::context::{AppContext, Page, Services};
use crate::models::LoginToken;
use crate::pages::{CategoryPage, MediaManagementPage, TemplatePage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] Using API at {}", config.api_base_url);

    let login_token = config.dev_access_token.clone().map(|access_token| LoginToken {
        access_token,
        refresh_token: None,
    });

    // State
    let page = signal(Page::Categories);

    // Provide store and context to all children
    provide_context(Store::new(AppState::new(login_token)));
    let ctx = AppContext::new(Services::new(config), page);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <TitleBar />
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Categories => view! { <CategoryPage /> }.into_any(),
                    Page::Media => view! { <MediaManagementPage /> }.into_any(),
                    Page::Template => view! { <TemplatePage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
