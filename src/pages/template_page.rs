//! Template Page

use leptos::prelude::*;

use crate::components::{TemplateSelectedQuestions, TemplateSubHeader};
use crate::models::Question;
use crate::store::{store_set_questions, use_app_store};

/// Template editor. `questions`, when given, replaces the shared selection.
#[component]
pub fn TemplatePage(#[prop(optional)] questions: Option<Vec<Question>>) -> impl IntoView {
    let store = use_app_store();
    if let Some(questions) = questions {
        store_set_questions(&store, questions);
    }

    view! {
        <section class="template-page">
            <TemplateSubHeader />
            <TemplateSelectedQuestions />
        </section>
    }
}
