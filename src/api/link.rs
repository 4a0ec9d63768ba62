//! Link Endpoints

use reqwest::Method;

use super::HttpApi;
use crate::error::ApiResult;
use crate::models::{LinkDetail, LinkList, LinkRequest, LinkSummary};

pub const LINK_PATH: &str = "/link";

pub(super) async fn list(api: &HttpApi, token: &str) -> ApiResult<LinkList> {
    HttpApi::send_json(api.request(Method::GET, LINK_PATH, token)).await
}

pub(super) async fn create(api: &HttpApi, request: &LinkRequest, token: &str) -> ApiResult<LinkSummary> {
    let builder = api.request(Method::POST, LINK_PATH, token).json(request);
    HttpApi::send_json(builder).await
}

pub(super) async fn details(api: &HttpApi, id: u64, token: &str) -> ApiResult<LinkDetail> {
    let path = format!("{}/{}", LINK_PATH, id);
    HttpApi::send_json(api.request(Method::GET, &path, token)).await
}
