//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{access_token, LoginToken, Question};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user's token; `None` sends unauthenticated requests
    pub login_token: Option<LoginToken>,
    /// Questions picked for the template being edited
    pub question_list: Vec<Question>,
    /// Title of the record card the template was opened from
    pub selected_record_card: String,
    /// Whether the link creation modal is shown
    pub media_modal_open: bool,
    /// Category filter on the media page (None = all)
    pub selected_category: Option<u64>,
}

impl AppState {
    pub fn new(login_token: Option<LoginToken>) -> Self {
        Self {
            login_token,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Bearer token for API calls, empty when logged out
pub fn store_access_token(store: &AppStore) -> String {
    access_token(store.login_token().get().as_ref())
}

pub fn store_set_media_modal(store: &AppStore, open: bool) {
    store.media_modal_open().set(open);
}

pub fn store_select_category(store: &AppStore, category: Option<u64>) {
    store.selected_category().set(category);
}

pub fn store_set_record_card(store: &AppStore, title: String) {
    store.selected_record_card().set(title);
}

/// Replace the questions picked for the template
pub fn store_set_questions(store: &AppStore, questions: Vec<Question>) {
    log::debug!("[STORE] {} template questions", questions.len());
    store.question_list().set(questions);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            question_title: format!("title {}", id),
            tag_name: "tag".to_string(),
        }
    }

    #[test]
    fn test_set_questions_replaces_list() {
        let store = Store::new(AppState::default());
        store_set_questions(&store, vec![question("a"), question("b")]);
        assert_eq!(store.question_list().get_untracked().len(), 2);

        store_set_questions(&store, vec![question("c")]);
        assert_eq!(store.question_list().get_untracked(), vec![question("c")]);
    }
}
