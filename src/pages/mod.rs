//! Pages
//!
//! Top-level screens switched by `AppContext::navigate`.

mod category_page;
mod media_management;
mod template_page;

pub use category_page::CategoryPage;
pub use media_management::MediaManagementPage;
pub use template_page::TemplatePage;
