//! UI Components
//!
//! Reusable Leptos components.

mod category_header;
mod category_list;
mod category_selector;
mod delete_confirm_button;
mod link_composer;
mod link_form;
mod link_view;
mod media_list;
mod modal;
mod question_list;
mod template_sub_header;
mod title_bar;

pub use category_header::CategoryHeader;
pub use category_list::CategoryListContents;
pub use category_selector::CategorySelector;
pub use delete_confirm_button::DeleteConfirmButton;
pub use link_composer::LinkComposer;
pub use link_form::LinkForm;
pub use link_view::LinkView;
pub use media_list::MediaListContainer;
pub use modal::Modal;
pub use question_list::TemplateSelectedQuestions;
pub use template_sub_header::TemplateSubHeader;
pub use title_bar::TitleBar;
