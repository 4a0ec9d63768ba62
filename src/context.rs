//! Application Context
//!
//! Shared services and signals provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{HttpApi, MediaApi};
use crate::cache::ResourceCache;
use crate::config::AppConfig;
use crate::controllers::{CategoryController, LinkCreator};
use crate::models::{CategoryList, LinkList};

/// Top-level screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Categories,
    Media,
    Template,
}

/// Injected dependencies shared by every component
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn MediaApi>,
    pub categories: ResourceCache<CategoryList>,
    pub links: ResourceCache<LinkList>,
    pub config: AppConfig,
}

impl Services {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: Arc::new(HttpApi::new(config.api_base_url.clone())),
            categories: ResourceCache::new(),
            links: ResourceCache::new(),
            config,
        }
    }

    pub fn category_controller(&self, token: &str) -> CategoryController {
        CategoryController::new(
            self.api.clone(),
            self.categories.clone(),
            token,
            self.config.category_limit,
        )
    }

    pub fn link_creator(&self, token: &str) -> LinkCreator {
        LinkCreator::new(self.api.clone(), self.links.clone(), token)
    }
}

/// App-wide services and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services>,
    /// Current screen - read
    pub page: ReadSignal<Page>,
    /// Current screen - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(services: Services, page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            services: StoredValue::new(services),
            page: page.0,
            set_page: page.1,
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.services.with_value(|services| services.config.clone())
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
