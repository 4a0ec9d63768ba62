//! Link Creator
//!
//! Creates a link, fetches its detail and appends it to the cached link list.

use std::sync::Arc;

use crate::api::{MediaApi, LINK_PATH};
use crate::cache::{CacheKey, ResourceCache};
use crate::error::ApiResult;
use crate::messages;
use crate::models::{LinkDetail, LinkForm, LinkList, LinkSummary};

pub struct LinkCreator {
    api: Arc<dyn MediaApi>,
    cache: ResourceCache<LinkList>,
    token: String,
}

impl LinkCreator {
    pub fn new(api: Arc<dyn MediaApi>, cache: ResourceCache<LinkList>, token: impl Into<String>) -> Self {
        Self {
            api,
            cache,
            token: token.into(),
        }
    }

    /// Link lists are cached per access token
    pub fn key(&self) -> CacheKey {
        CacheKey::new(LINK_PATH, self.token.clone())
    }

    /// Tracked read of the cached list
    pub fn links(&self) -> Vec<LinkDetail> {
        let key = self.key();
        self.cache.subscribe(&key);
        self.cache
            .get(&key)
            .map(|list| list.archive_links)
            .unwrap_or_default()
    }

    pub fn cached_detail(&self, id: u64) -> Option<LinkDetail> {
        self.links().into_iter().find(|link| link.id == id)
    }

    pub async fn refresh(&self) -> ApiResult<()> {
        let list = self
            .api
            .list_links(&self.token)
            .await
            .inspect_err(|e| log::error!("[LINK] {}: {}", messages::LINK_LOAD_FAILED, e))?;
        log::debug!("[LINK] Loaded {} links", list.archive_links.len());
        self.cache.put(&self.key(), list);
        Ok(())
    }

    /// First step of a submit: send the form
    pub async fn create(&self, form: &LinkForm) -> ApiResult<LinkSummary> {
        let request = form.to_request();
        self.api
            .create_link(&request, &self.token)
            .await
            .inspect_err(|e| log::error!("[LINK] {}: {}", messages::LINK_CREATE_FAILED, e))
    }

    /// Second step: fetch the stored record and append it to the cached list
    pub async fn attach_detail(&self, id: u64) -> ApiResult<LinkDetail> {
        let detail = self
            .api
            .get_link_details(id, &self.token)
            .await
            .inspect_err(|e| log::error!("[LINK] {}: {}", messages::LINK_DETAIL_FAILED, e))?;

        let appended = detail.clone();
        self.cache.mutate(&self.key(), move |current| {
            let mut next = current.cloned().unwrap_or_default();
            next.archive_links.push(appended);
            Some(next)
        });
        log::debug!("[LINK] Cached link {}", id);
        Ok(detail)
    }

    #[cfg(test)]
    pub async fn submit(&self, form: &LinkForm) -> ApiResult<(LinkSummary, LinkDetail)> {
        let summary = self.create(form).await?;
        let detail = self.attach_detail(summary.id).await?;
        Ok((summary, detail))
    }
}

/// Links belonging to `category`, or all links when no category is selected
pub fn links_in_category(links: &[LinkDetail], category: Option<u64>) -> Vec<LinkDetail> {
    links
        .iter()
        .filter(|link| category.map_or(true, |id| link.category_id == id))
        .cloned()
        .collect()
}

/// Identifies one showing of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

/// Success banner with a single pending expiry.
///
/// Each `trigger` starts a new generation; an expiry only hides the banner
/// if it belongs to the current generation, so a stale timer is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionBanner {
    visible: bool,
    generation: u64,
}

impl CompletionBanner {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn trigger(&mut self) -> BannerTicket {
        self.generation += 1;
        self.visible = true;
        BannerTicket(self.generation)
    }

    /// Timer fired; returns whether the banner was hidden
    pub fn expire(&mut self, ticket: BannerTicket) -> bool {
        if ticket.0 == self.generation && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    /// Hide now and orphan any pending timer
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeApi};
    use futures::executor::block_on;

    fn form() -> LinkForm {
        LinkForm {
            category: Some(7),
            link_url: "https://example.com/a".to_string(),
            thumbnail_url: "https://example.com/a.png".to_string(),
            title: "A".to_string(),
            description: "first".to_string(),
        }
    }

    #[test]
    fn test_submit_creates_fetches_and_appends() {
        let api = Arc::new(FakeApi::new());
        let creator = LinkCreator::new(api.clone(), ResourceCache::new(), "token");

        let (summary, detail) = block_on(creator.submit(&form())).unwrap();

        assert_eq!(summary.id, detail.id);
        assert_eq!(detail.url, "https://example.com/a;https://example.com/a.png");
        assert_eq!(creator.links(), vec![detail.clone()]);
        assert_eq!(creator.cached_detail(detail.id), Some(detail.clone()));

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], Call::CreateLink(ref req) if req.category_id == 7));
        assert_eq!(calls[1], Call::GetLinkDetails(summary.id));
    }

    #[test]
    fn test_append_keeps_existing_links() {
        let api = Arc::new(FakeApi::new());
        let creator = LinkCreator::new(api, ResourceCache::new(), "token");
        block_on(creator.submit(&form())).unwrap();
        block_on(creator.submit(&form())).unwrap();
        assert_eq!(creator.links().len(), 2);
    }

    #[test]
    fn test_failed_create_skips_detail() {
        let api = Arc::new(FakeApi::new().fail_create());
        let creator = LinkCreator::new(api.clone(), ResourceCache::new(), "token");
        assert!(block_on(creator.submit(&form())).is_err());
        assert_eq!(api.calls().len(), 1);
        assert!(creator.links().is_empty());
    }

    #[test]
    fn test_failed_detail_leaves_cache() {
        let api = Arc::new(FakeApi::new().fail_details());
        let creator = LinkCreator::new(api, ResourceCache::new(), "token");
        let summary = block_on(creator.create(&form())).unwrap();
        assert!(block_on(creator.attach_detail(summary.id)).is_err());
        assert!(creator.cache.get(&creator.key()).is_none());
    }

    #[test]
    fn test_links_in_category() {
        let link = |id, category_id| LinkDetail {
            id,
            category_id,
            url: String::new(),
            title: String::new(),
            description: String::new(),
        };
        let links = vec![link(1, 1), link(2, 2), link(3, 1)];
        let ids = |list: Vec<LinkDetail>| list.iter().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(ids(links_in_category(&links, Some(1))), vec![1, 3]);
        assert_eq!(ids(links_in_category(&links, None)), vec![1, 2, 3]);
        assert!(links_in_category(&links, Some(9)).is_empty());
    }

    #[test]
    fn test_banner_expires_after_its_timer() {
        let mut banner = CompletionBanner::default();
        assert!(!banner.is_visible());
        let ticket = banner.trigger();
        assert!(banner.is_visible());
        assert!(banner.expire(ticket));
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_retrigger_orphans_older_timer() {
        let mut banner = CompletionBanner::default();
        let first = banner.trigger();
        let second = banner.trigger();
        assert!(!banner.expire(first));
        assert!(banner.is_visible());
        assert!(banner.expire(second));
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_cancel_hides_and_disarms() {
        let mut banner = CompletionBanner::default();
        let ticket = banner.trigger();
        banner.cancel();
        assert!(!banner.is_visible());
        assert!(!banner.expire(ticket));
    }
}
