//! UI Components
//!
//! One component per page, plus the pieces they share.

mod admin_page;
mod category_admin_page;
mod category_page;
mod index_page;
mod recipe_form_panel;
mod recipe_page;
mod search_box;

pub use admin_page::AdminPage;
pub use category_admin_page::CategoryAdminPage;
pub use category_page::CategoryPage;
pub use index_page::IndexPage;
pub use recipe_page::RecipePage;
pub use search_box::SearchBox;
