//! REST API Bindings
//!
//! Frontend bindings to the media backend, organized by domain.
//! `MediaApi` is the seam controllers depend on; `HttpApi` is the browser
//! implementation.

mod category;
mod link;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Category, CategoryList, CategoryRequest, LinkDetail, LinkList, LinkRequest, LinkSummary,
};

pub use category::CATEGORY_PATH;
pub use link::LINK_PATH;

/// Remote operations used by the controllers
#[async_trait(?Send)]
pub trait MediaApi: Send + Sync {
    async fn list_categories(&self, token: &str) -> ApiResult<CategoryList>;

    async fn create_category(&self, token: &str, request: &CategoryRequest) -> ApiResult<Category>;

    async fn update_category(&self, id: u64, request: &CategoryRequest, token: &str) -> ApiResult<()>;

    async fn delete_category(&self, id: u64, token: &str) -> ApiResult<()>;

    async fn list_links(&self, token: &str) -> ApiResult<LinkList>;

    async fn create_link(&self, request: &LinkRequest, token: &str) -> ApiResult<LinkSummary>;

    async fn get_link_details(&self, id: u64, token: &str) -> ApiResult<LinkDetail>;
}

/// `MediaApi` over HTTP with bearer-token auth
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str, token: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        if token.is_empty() {
            builder
        } else {
            builder.bearer_auth(token)
        }
    }

    async fn send(builder: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> ApiResult<T> {
        let text = Self::send(builder).await?.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl MediaApi for HttpApi {
    async fn list_categories(&self, token: &str) -> ApiResult<CategoryList> {
        category::list(self, token).await
    }

    async fn create_category(&self, token: &str, request: &CategoryRequest) -> ApiResult<Category> {
        category::create(self, token, request).await
    }

    async fn update_category(&self, id: u64, request: &CategoryRequest, token: &str) -> ApiResult<()> {
        category::update(self, id, request, token).await
    }

    async fn delete_category(&self, id: u64, token: &str) -> ApiResult<()> {
        category::delete(self, id, token).await
    }

    async fn list_links(&self, token: &str) -> ApiResult<LinkList> {
        link::list(self, token).await
    }

    async fn create_link(&self, request: &LinkRequest, token: &str) -> ApiResult<LinkSummary> {
        link::create(self, request, token).await
    }

    async fn get_link_details(&self, id: u64, token: &str) -> ApiResult<LinkDetail> {
        link::details(self, id, token).await
    }
}
