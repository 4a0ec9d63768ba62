//! Category Controller
//!
//! Add, edit and bulk-delete categories against the cached category list.
//! Every mutation is applied to the cache optimistically; failures are
//! logged and never rolled back.

use std::sync::Arc;

use futures::future::join_all;

use crate::api::{MediaApi, CATEGORY_PATH};
use crate::cache::{CacheKey, ResourceCache};
use crate::error::{ApiError, ApiResult};
use crate::messages;
use crate::models::{Category, CategoryList, CategoryRequest};

/// Result of `CategoryController::add`
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Category),
    /// The list is full; nothing was sent
    LimitReached,
    Failed,
}

/// Per-id outcome of a bulk delete
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: Vec<u64>,
    pub failed: Vec<(u64, ApiError)>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_ids(&self) -> Vec<u64> {
        self.failed.iter().map(|(id, _)| *id).collect()
    }
}

/// Ids checked for bulk deletion, in selection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedIds(Vec<u64>);

impl SelectedIds {
    pub fn toggle(&mut self, id: u64, checked: bool) {
        if checked {
            if !self.0.contains(&id) {
                self.0.push(id);
            }
        } else {
            self.0.retain(|selected| *selected != id);
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Keep only the ids whose delete failed so the user can retry them
    pub fn retain_failed(&mut self, report: &DeleteReport) {
        let failed = report.failed_ids();
        self.0.retain(|id| failed.contains(id));
    }
}

pub struct CategoryController {
    api: Arc<dyn MediaApi>,
    cache: ResourceCache<CategoryList>,
    token: String,
    limit: usize,
}

impl CategoryController {
    pub fn new(
        api: Arc<dyn MediaApi>,
        cache: ResourceCache<CategoryList>,
        token: impl Into<String>,
        limit: usize,
    ) -> Self {
        Self {
            api,
            cache,
            token: token.into(),
            limit,
        }
    }

    pub fn key(&self) -> CacheKey {
        CacheKey::new(CATEGORY_PATH, self.token.clone())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Cached categories, empty when nothing has been loaded.
    ///
    /// Inside a reactive scope the caller re-runs when this list changes.
    pub fn categories(&self) -> Vec<Category> {
        let key = self.key();
        self.cache.subscribe(&key);
        self.cache
            .get(&key)
            .map(|list| list.categories)
            .unwrap_or_default()
    }

    /// Load the list from the server into the cache
    pub async fn refresh(&self) -> ApiResult<()> {
        match self.api.list_categories(&self.token).await {
            Ok(list) => {
                log::debug!("[CATEGORY] Loaded {} categories", list.categories.len());
                self.cache.put(&self.key(), list);
                Ok(())
            }
            Err(e) => {
                log::error!("[CATEGORY] {}: {}", messages::CATEGORY_LOAD_FAILED, e);
                // Data fetched with a rejected token is not shown again
                if matches!(e, ApiError::Status { status: 401, .. }) {
                    self.cache.invalidate(&self.key());
                }
                Err(e)
            }
        }
    }

    /// Create an empty category and append it to the cached list
    pub async fn add(&self) -> AddOutcome {
        if self.categories().len() >= self.limit {
            log::warn!("[CATEGORY] Limit of {} reached", self.limit);
            return AddOutcome::LimitReached;
        }

        let request = CategoryRequest::default();
        let created = match self.api.create_category(&self.token, &request).await {
            Ok(created) => created,
            Err(e) => {
                log::error!("[CATEGORY] {}: {}", messages::CATEGORY_ADD_FAILED, e);
                return AddOutcome::Failed;
            }
        };

        let appended = created.clone();
        self.cache.mutate(&self.key(), move |current| {
            let mut next = current.cloned().unwrap_or_default();
            next.categories.push(appended);
            Some(next)
        });
        log::debug!("[CATEGORY] Added category {}", created.id);
        AddOutcome::Added(created)
    }

    /// Rewrite the title locally, then send it to the server
    pub async fn update(&self, id: u64, text: &str) -> ApiResult<()> {
        let mut description = String::new();
        self.cache.mutate(&self.key(), |current| {
            let list = current?;
            let mut next = list.clone();
            let target = next.categories.iter_mut().find(|category| category.id == id)?;
            target.title = text.to_string();
            description = target.description.clone();
            Some(next)
        });

        let request = CategoryRequest {
            title: text.to_string(),
            description,
        };
        self.api
            .update_category(id, &request, &self.token)
            .await
            .inspect_err(|e| log::error!("[CATEGORY] {}: {}", messages::CATEGORY_UPDATE_FAILED, e))
    }

    /// Delete all `ids` concurrently and drop the ones that succeeded from the cache
    pub async fn delete(&self, ids: &[u64]) -> DeleteReport {
        let api = &self.api;
        let token = self.token.as_str();
        let results = join_all(ids.iter().map(|&id| async move {
            (id, api.delete_category(id, token).await)
        }))
        .await;

        let mut report = DeleteReport::default();
        for (id, result) in results {
            match result {
                Ok(()) => report.deleted.push(id),
                Err(e) => {
                    log::error!("[CATEGORY] {} (id {}): {}", messages::CATEGORY_DELETE_FAILED, id, e);
                    report.failed.push((id, e));
                }
            }
        }

        if !report.deleted.is_empty() {
            let deleted = &report.deleted;
            self.cache.mutate(&self.key(), |current| {
                let list = current?;
                Some(CategoryList {
                    categories: list
                        .categories
                        .iter()
                        .filter(|category| !deleted.contains(&category.id))
                        .cloned()
                        .collect(),
                    message: list.message.clone(),
                })
            });
        }
        report
    }
}
