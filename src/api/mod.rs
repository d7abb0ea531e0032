//! Backend API
//!
//! Typed bindings to the recipe site's REST endpoints, organized behind the
//! `RecipeApi` trait so controllers can run against a fake in tests.

mod endpoint;
mod http;
#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{CategorySummary, Recipe, RecipeInput};

pub use endpoint::{encode_component, Endpoint};
pub use http::HttpApi;

/// Operations the frontend performs against the backend
#[async_trait(?Send)]
pub trait RecipeApi {
    /// Recipes whose name or ingredients contain `query`; all recipes for ""
    async fn search(&self, query: &str) -> ApiResult<Vec<Recipe>>;

    async fn get_recipe(&self, id: u32) -> ApiResult<Recipe>;

    async fn create_recipe(&self, input: &RecipeInput) -> ApiResult<()>;

    async fn update_recipe(&self, id: u32, input: &RecipeInput) -> ApiResult<()>;

    async fn delete_recipe(&self, id: u32) -> ApiResult<()>;

    /// Categories with recipe counts, default category last
    async fn list_categories(&self) -> ApiResult<Vec<CategorySummary>>;

    async fn category_recipes(&self, category: &str) -> ApiResult<Vec<Recipe>>;

    async fn rename_category(&self, category: &str, new_name: &str) -> ApiResult<()>;

    /// Delete a category; the backend moves its recipes to the default category
    async fn delete_category(&self, category: &str) -> ApiResult<()>;
}
