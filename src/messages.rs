//! Localized UI and diagnostic strings (ko-KR).

pub const CATEGORY_LIMIT_ALERT: &str = "카테고리는 10개까지 추가할 수있습니다.";
pub const CATEGORY_ADD_FAILED: &str = "카테고리 추가 중 오류 발생";
pub const CATEGORY_UPDATE_FAILED: &str = "카테고리 업데이트 문제 발생";
pub const CATEGORY_DELETE_FAILED: &str = "카테고리 삭제 중 오류 발생";
pub const CATEGORY_LOAD_FAILED: &str = "카테고리 목록 조회 중 오류 발생";

pub const LINK_CREATE_FAILED: &str = "링크 생성 중 오류 발생";
pub const LINK_DETAIL_FAILED: &str = "링크 상세 조회 중 오류 발생";
pub const LINK_LOAD_FAILED: &str = "링크 목록 조회 중 오류 발생";
pub const LINK_SAVED: &str = "저장되었습니다.";

pub const MEDIA_MODAL_TITLE: &str = "센터 링크 생성";
pub const EMPTY_QUESTIONS: &str = "문항이 없습니다.";
pub const EMPTY_QUESTIONS_ALT: &str = "문항 없음 이미지";
pub const TEMPLATE_TITLE_LABEL: &str = "템플릿 제목*";
pub const TEMPLATE_DESCRIPTION_LABEL: &str = "설명";

/// Alert text for a configurable cap
pub fn category_limit_alert(limit: usize) -> String {
    if limit == crate::config::DEFAULT_CATEGORY_LIMIT {
        CATEGORY_LIMIT_ALERT.to_string()
    } else {
        format!("카테고리는 {}개까지 추가할 수있습니다.", limit)
    }
}
