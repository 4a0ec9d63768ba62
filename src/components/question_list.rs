//! Template Question List Component
//!
//! Questions selected for the current template, or an empty-state placeholder.

use leptos::prelude::*;

use crate::controllers::{QuestionListing, QuestionRow};
use crate::messages;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn QuestionItem(row: QuestionRow) -> impl IntoView {
    view! {
        <div class="question" data-id=row.key>
            <span class="question-tag">{row.tag_name}</span>
            <span class="question-title">{row.title}</span>
        </div>
    }
}

#[component]
pub fn TemplateSelectedQuestions() -> impl IntoView {
    let store = use_app_store();
    let listing = Memo::new(move |_| QuestionListing::from_questions(&store.question_list().read()));

    let container_style = move || {
        if listing.get().is_empty() {
            "background-color: none;"
        } else {
            "background-color: rgba(235, 241, 255, 0.26);"
        }
    };

    view! {
        <div class="question-container" style=container_style>
            {move || match listing.get() {
                QuestionListing::Empty => view! {
                    <div class="empty-question">
                        <img
                            src="assets/empty-question.svg"
                            alt=messages::EMPTY_QUESTIONS_ALT
                            class="empty-question-image"
                        />
                        {messages::EMPTY_QUESTIONS}
                    </div>
                }.into_any(),
                QuestionListing::Rows(rows) => view! {
                    <For
                        each=move || rows.clone()
                        key=|row| row.key.clone()
                        children=move |row| view! { <QuestionItem row=row /> }
                    />
                }.into_any(),
            }}
        </div>
    }
}
