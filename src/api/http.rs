//! HTTP Client
//!
//! `RecipeApi` over `reqwest` (fetch on wasm32).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Endpoint, RecipeApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{CategorySummary, ErrorBody, Recipe, RecipeInput, RenameCategoryBody};

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    /// `base` is an absolute origin such as `http://pi.local:5002`
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { client: Client::new(), base }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base, endpoint.path())
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        self.client.request(endpoint.method(), self.url(endpoint))
    }

    async fn execute(&self, endpoint: &Endpoint, request: RequestBuilder) -> ApiResult<Response> {
        log::debug!("[API] {}", endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        log::warn!("[API] {} -> {} {:?}", endpoint, status.as_u16(), body.error);
        Err(ApiError::Server { status: status.as_u16(), message: body.error })
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let response = self.execute(&endpoint, self.request(&endpoint)).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send<B: Serialize + ?Sized>(&self, endpoint: Endpoint, body: Option<&B>) -> ApiResult<()> {
        let mut request = self.request(&endpoint);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(&endpoint, request).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpApi {
    async fn search(&self, query: &str) -> ApiResult<Vec<Recipe>> {
        self.fetch(Endpoint::Search(query.to_string())).await
    }

    async fn get_recipe(&self, id: u32) -> ApiResult<Recipe> {
        self.fetch(Endpoint::GetRecipe(id)).await
    }

    async fn create_recipe(&self, input: &RecipeInput) -> ApiResult<()> {
        self.send(Endpoint::CreateRecipe, Some(input)).await
    }

    async fn update_recipe(&self, id: u32, input: &RecipeInput) -> ApiResult<()> {
        self.send(Endpoint::UpdateRecipe(id), Some(input)).await
    }

    async fn delete_recipe(&self, id: u32) -> ApiResult<()> {
        self.send::<()>(Endpoint::DeleteRecipe(id), None).await
    }

    async fn list_categories(&self) -> ApiResult<Vec<CategorySummary>> {
        self.fetch(Endpoint::Categories).await
    }

    async fn category_recipes(&self, category: &str) -> ApiResult<Vec<Recipe>> {
        self.fetch(Endpoint::CategoryRecipes(category.to_string())).await
    }

    async fn rename_category(&self, category: &str, new_name: &str) -> ApiResult<()> {
        let body = RenameCategoryBody { new_name };
        self.send(Endpoint::RenameCategory(category.to_string()), Some(&body)).await
    }

    async fn delete_category(&self, category: &str) -> ApiResult<()> {
        self.send::<()>(Endpoint::DeleteCategory(category.to_string()), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = HttpApi::new("http://localhost:5002/");
        assert_eq!(api.url(&Endpoint::GetRecipe(3)), "http://localhost:5002/api/recipe/3");
        assert_eq!(
            api.url(&Endpoint::Search("чушки".into())),
            "http://localhost:5002/api/search?q=%D1%87%D1%83%D1%88%D0%BA%D0%B8"
        );
    }
}
