//! In-memory `RecipeApi` that records every call.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{Endpoint, RecipeApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{CategorySummary, Recipe, RecipeInput};

#[derive(Default)]
pub struct FakeApi {
    pub recipes: RefCell<Vec<Recipe>>,
    pub categories: RefCell<Vec<CategorySummary>>,
    pub calls: RefCell<Vec<Endpoint>>,
    pub bodies: RefCell<Vec<RecipeInput>>,
    /// Returned by the next call instead of its normal result
    pub fail_next: RefCell<Option<ApiError>>,
}

impl FakeApi {
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes: RefCell::new(recipes), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|e| e.to_string()).collect()
    }

    fn record(&self, endpoint: Endpoint) -> ApiResult<()> {
        self.calls.borrow_mut().push(endpoint);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl RecipeApi for FakeApi {
    async fn search(&self, query: &str) -> ApiResult<Vec<Recipe>> {
        self.record(Endpoint::Search(query.to_string()))?;
        let needle = query.to_lowercase();
        Ok(self
            .recipes
            .borrow()
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.name.to_lowercase().contains(&needle)
                    || r.ingredients.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn get_recipe(&self, id: u32) -> ApiResult<Recipe> {
        self.record(Endpoint::GetRecipe(id))?;
        self.recipes
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Server { status: 404, message: Some("not found".into()) })
    }

    async fn create_recipe(&self, input: &RecipeInput) -> ApiResult<()> {
        self.record(Endpoint::CreateRecipe)?;
        self.bodies.borrow_mut().push(input.clone());
        Ok(())
    }

    async fn update_recipe(&self, id: u32, input: &RecipeInput) -> ApiResult<()> {
        self.record(Endpoint::UpdateRecipe(id))?;
        self.bodies.borrow_mut().push(input.clone());
        Ok(())
    }

    async fn delete_recipe(&self, id: u32) -> ApiResult<()> {
        self.record(Endpoint::DeleteRecipe(id))?;
        self.recipes.borrow_mut().retain(|r| r.id != id);
        Ok(())
    }

    async fn list_categories(&self) -> ApiResult<Vec<CategorySummary>> {
        self.record(Endpoint::Categories)?;
        Ok(self.categories.borrow().clone())
    }

    async fn category_recipes(&self, category: &str) -> ApiResult<Vec<Recipe>> {
        self.record(Endpoint::CategoryRecipes(category.to_string()))?;
        Ok(self
            .recipes
            .borrow()
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }

    async fn rename_category(&self, category: &str, _new_name: &str) -> ApiResult<()> {
        self.record(Endpoint::RenameCategory(category.to_string()))
    }

    async fn delete_category(&self, category: &str) -> ApiResult<()> {
        self.record(Endpoint::DeleteCategory(category.to_string()))
    }
}
