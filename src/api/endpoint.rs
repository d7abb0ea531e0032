//! Endpoint Table
//!
//! Method and path for every backend call.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;

/// Characters escaped in a path segment or query value.
/// Leaves the same unreserved set as JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Search(String),
    GetRecipe(u32),
    CreateRecipe,
    UpdateRecipe(u32),
    DeleteRecipe(u32),
    Categories,
    CategoryRecipes(String),
    RenameCategory(String),
    DeleteCategory(String),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Search(_)
            | Endpoint::GetRecipe(_)
            | Endpoint::Categories
            | Endpoint::CategoryRecipes(_) => Method::GET,
            Endpoint::CreateRecipe => Method::POST,
            Endpoint::UpdateRecipe(_) | Endpoint::RenameCategory(_) => Method::PUT,
            Endpoint::DeleteRecipe(_) | Endpoint::DeleteCategory(_) => Method::DELETE,
        }
    }

    /// Path and query, relative to the API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::Search(q) => format!("/api/search?q={}", encode_component(q)),
            Endpoint::GetRecipe(id) | Endpoint::UpdateRecipe(id) | Endpoint::DeleteRecipe(id) => {
                format!("/api/recipe/{}", id)
            }
            Endpoint::CreateRecipe => "/api/recipe".to_string(),
            Endpoint::Categories => "/api/categories".to_string(),
            Endpoint::CategoryRecipes(name) => {
                format!("/api/category/{}/recipes", encode_component(name))
            }
            Endpoint::RenameCategory(name) | Endpoint::DeleteCategory(name) => {
                format!("/api/category/{}", encode_component(name))
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_paths() {
        assert_eq!(Endpoint::UpdateRecipe(5).to_string(), "PUT /api/recipe/5");
        assert_eq!(Endpoint::CreateRecipe.to_string(), "POST /api/recipe");
        assert_eq!(Endpoint::DeleteRecipe(7).to_string(), "DELETE /api/recipe/7");
        assert_eq!(Endpoint::GetRecipe(7).to_string(), "GET /api/recipe/7");
    }

    #[test]
    fn test_search_query_is_encoded() {
        assert_eq!(Endpoint::Search(String::new()).path(), "/api/search?q=");
        assert_eq!(
            Endpoint::Search("мед & орехи".into()).path(),
            "/api/search?q=%D0%BC%D0%B5%D0%B4%20%26%20%D0%BE%D1%80%D0%B5%D1%85%D0%B8"
        );
    }

    #[test]
    fn test_category_name_is_one_segment() {
        assert_eq!(
            Endpoint::RenameCategory("a/b c".into()).path(),
            "/api/category/a%2Fb%20c"
        );
        assert_eq!(Endpoint::DeleteCategory("x".into()).method(), Method::DELETE);
        assert_eq!(
            Endpoint::CategoryRecipes("Супи".into()).path(),
            "/api/category/%D0%A1%D1%83%D0%BF%D0%B8/recipes"
        );
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    }
}
