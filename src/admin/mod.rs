//! Admin Controllers
//!
//! DOM-free logic behind the admin recipe form and the category admin page.

mod category;
mod recipe_form;

pub use category::*;
pub use recipe_form::*;
