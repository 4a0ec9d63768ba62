//! In-memory `MediaApi` for controller tests.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};

use async_trait::async_trait;

use super::MediaApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Category, CategoryList, CategoryRequest, LinkDetail, LinkList, LinkRequest, LinkSummary,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListCategories,
    CreateCategory,
    UpdateCategory(u64, String),
    DeleteCategory(u64),
    ListLinks,
    CreateLink(LinkRequest),
    GetLinkDetails(u64),
}

#[derive(Default)]
struct State {
    next_id: u64,
    categories: Vec<Category>,
    links: Vec<LinkDetail>,
    calls: Vec<Call>,
    tokens: Vec<String>,
    fail_create: bool,
    fail_update: bool,
    fail_details: bool,
    fail_list: Option<u16>,
    fail_delete: HashSet<u64>,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        body: "boom".to_string(),
    }
}

/// Suspends `n` times so concurrent calls finish out of order.
struct Yield(u64);

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            Poll::Ready(())
        } else {
            self.0 -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 100,
                ..Default::default()
            }),
        }
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.state.lock().unwrap().categories = categories;
        self
    }

    pub fn fail_create(self) -> Self {
        self.state.lock().unwrap().fail_create = true;
        self
    }

    pub fn fail_update(self) -> Self {
        self.state.lock().unwrap().fail_update = true;
        self
    }

    pub fn fail_details(self) -> Self {
        self.state.lock().unwrap().fail_details = true;
        self
    }

    pub fn fail_list_with(self, status: u16) -> Self {
        self.state.lock().unwrap().fail_list = Some(status);
        self
    }

    pub fn fail_delete_of(self, id: u64) -> Self {
        self.state.lock().unwrap().fail_delete.insert(id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.state.lock().unwrap().tokens.clone()
    }

    pub fn server_categories(&self) -> Vec<Category> {
        self.state.lock().unwrap().categories.clone()
    }

    fn record(&self, call: Call, token: &str) {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state.tokens.push(token.to_string());
    }
}

#[async_trait(?Send)]
impl MediaApi for FakeApi {
    async fn list_categories(&self, token: &str) -> ApiResult<CategoryList> {
        self.record(Call::ListCategories, token);
        if let Some(status) = self.state.lock().unwrap().fail_list {
            return Err(ApiError::Status {
                status,
                body: String::new(),
            });
        }
        Ok(CategoryList {
            categories: self.server_categories(),
            message: "ok".to_string(),
        })
    }

    async fn create_category(&self, token: &str, request: &CategoryRequest) -> ApiResult<Category> {
        self.record(Call::CreateCategory, token);
        let mut state = self.state.lock().unwrap();
        if state.fail_create {
            return Err(server_error());
        }
        state.next_id += 1;
        let category = Category {
            id: state.next_id,
            title: request.title.clone(),
            description: request.description.clone(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: u64, request: &CategoryRequest, token: &str) -> ApiResult<()> {
        self.record(Call::UpdateCategory(id, request.title.clone()), token);
        let mut state = self.state.lock().unwrap();
        if state.fail_update {
            return Err(server_error());
        }
        if let Some(category) = state.categories.iter_mut().find(|c| c.id == id) {
            category.title = request.title.clone();
            category.description = request.description.clone();
        }
        Ok(())
    }

    async fn delete_category(&self, id: u64, token: &str) -> ApiResult<()> {
        self.record(Call::DeleteCategory(id), token);
        // Larger ids finish first
        Yield(1000u64.saturating_sub(id) % 7).await;
        let mut state = self.state.lock().unwrap();
        if state.fail_delete.contains(&id) {
            return Err(server_error());
        }
        state.categories.retain(|c| c.id != id);
        Ok(())
    }

    async fn list_links(&self, token: &str) -> ApiResult<LinkList> {
        self.record(Call::ListLinks, token);
        Ok(LinkList {
            archive_links: self.state.lock().unwrap().links.clone(),
            message: "ok".to_string(),
        })
    }

    async fn create_link(&self, request: &LinkRequest, token: &str) -> ApiResult<LinkSummary> {
        self.record(Call::CreateLink(request.clone()), token);
        let mut state = self.state.lock().unwrap();
        if state.fail_create {
            return Err(server_error());
        }
        state.next_id += 1;
        let id = state.next_id;
        state.links.push(LinkDetail {
            id,
            category_id: request.category_id,
            url: request.url.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
        });
        Ok(LinkSummary {
            id,
            message: "created".to_string(),
        })
    }

    async fn get_link_details(&self, id: u64, token: &str) -> ApiResult<LinkDetail> {
        self.record(Call::GetLinkDetails(id), token);
        let state = self.state.lock().unwrap();
        if state.fail_details {
            return Err(server_error());
        }
        state
            .links
            .iter()
            .find(|link| link.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: "not found".to_string(),
            })
    }
}
