//! Category Endpoints

use reqwest::Method;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{Category, CategoryList, CategoryRequest};

pub const CATEGORY_PATH: &str = "/category";

fn item_path(id: u64) -> String {
    format!("{}/{}", CATEGORY_PATH, id)
}

pub(super) async fn list(api: &HttpApi, token: &str) -> ApiResult<CategoryList> {
    HttpApi::send_json(api.request(Method::GET, CATEGORY_PATH, token)).await
}

pub(super) async fn create(api: &HttpApi, token: &str, request: &CategoryRequest) -> ApiResult<Category> {
    let builder = api.request(Method::POST, CATEGORY_PATH, token).json(request);
    HttpApi::send_json(builder).await
}

pub(super) async fn update(
    api: &HttpApi,
    id: u64,
    request: &CategoryRequest,
    token: &str,
) -> ApiResult<()> {
    let builder = api.request(Method::PATCH, &item_path(id), token).json(request);
    HttpApi::send(builder).await?;
    Ok(())
}

pub(super) async fn delete(api: &HttpApi, id: u64, token: &str) -> ApiResult<()> {
    HttpApi::send(api.request(Method::DELETE, &item_path(id), token)).await?;
    Ok(())
}
