//! Recipe Form Controller
//!
//! Create/edit state machine for the admin recipe form, independent of the DOM.

use thiserror::Error;

use crate::api::RecipeApi;
use crate::dialog::Confirm;
use crate::error::{ApiError, ApiResult, ValidationError};
use crate::models::{Recipe, RecipeInput, DEFAULT_CATEGORY, NEW_CATEGORY_OPTION};

pub const SUBMIT_CREATE_LABEL: &str = "➕ Добави рецепта";
pub const SUBMIT_UPDATE_LABEL: &str = "💾 Обнови рецепта";
pub const CANCEL_LABEL: &str = "❌ Отказ";

pub const MSG_FILL_ALL: &str = "Моля попълнете всички полета";
pub const MSG_CREATED: &str = "Рецептата е добавена";
pub const MSG_UPDATED: &str = "Рецептата е обновена";
pub const MSG_DELETED: &str = "Рецептата е изтрита";
pub const MSG_LOAD_FAILED: &str = "Грешка при зареждане на рецептата";
pub const MSG_DELETE_FAILED: &str = "Грешка при изтриване";
pub const MSG_GENERIC: &str = "Грешка";
pub const MSG_CONNECTION: &str = "Грешка при връзка със сървъра";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    /// Editing the recipe with this id
    Edit(u32),
}

/// Effective category: typed name, else a real selection, else the default
pub fn resolve_category(custom: &str, selected: &str) -> String {
    let custom = custom.trim();
    if !custom.is_empty() {
        return custom.to_string();
    }
    if !selected.is_empty() && selected != NEW_CATEGORY_OPTION {
        return selected.to_string();
    }
    DEFAULT_CATEGORY.to_string()
}

/// Category combo: a select over existing categories plus a free-text input
/// revealed by the "new category" option
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryChoice {
    pub selected: String,
    pub custom: String,
    pub custom_visible: bool,
}

impl CategoryChoice {
    /// User picked `value` in the select
    pub fn select(&mut self, value: &str) {
        if value == NEW_CATEGORY_OPTION {
            self.custom_visible = true;
            self.selected.clear();
        } else {
            self.custom_visible = false;
            self.custom.clear();
            self.selected = value.to_string();
        }
    }

    /// Show `category`: selected if it is one of `options`, typed otherwise
    pub fn set(&mut self, category: &str, options: &[String]) {
        if options.iter().any(|o| o == category) {
            self.selected = category.to_string();
            self.custom.clear();
            self.custom_visible = false;
        } else {
            self.selected = NEW_CATEGORY_OPTION.to_string();
            self.custom = category.to_string();
            self.custom_visible = true;
        }
    }

    pub fn effective(&self) -> String {
        resolve_category(&self.custom, &self.selected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub mode: FormMode,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub category: CategoryChoice,
}

impl RecipeForm {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => SUBMIT_CREATE_LABEL,
            FormMode::Edit(_) => SUBMIT_UPDATE_LABEL,
        }
    }

    /// Fill the form from `recipe` and switch to edit mode
    pub fn load(&mut self, recipe: &Recipe, category_options: &[String]) {
        self.mode = FormMode::Edit(recipe.id);
        self.name = recipe.name.clone();
        self.ingredients = recipe.ingredients.clone();
        self.instructions = recipe.instructions.clone();
        self.category.set(&recipe.category, category_options);
    }

    /// Clear all fields and go back to create mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<RecipeInput, ValidationError> {
        let name = self.name.trim();
        let ingredients = self.ingredients.trim();
        let instructions = self.instructions.trim();
        if name.is_empty() || ingredients.is_empty() || instructions.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(RecipeInput {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            instructions: instructions.to_string(),
            category: Some(self.category.effective()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created,
    Updated,
}

impl Submitted {
    pub fn message(&self) -> &'static str {
        match self {
            Submitted::Created => MSG_CREATED,
            Submitted::Updated => MSG_UPDATED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(_) => MSG_FILL_ALL.to_string(),
            SubmitError::Api(err) => err.user_message(MSG_GENERIC, MSG_CONNECTION),
        }
    }
}

/// Fetch a recipe and build a form in edit mode for it
pub async fn edit_form<A: RecipeApi + ?Sized>(
    api: &A,
    id: u32,
    category_options: &[String],
) -> ApiResult<RecipeForm> {
    let recipe = api.get_recipe(id).await?;
    let mut form = RecipeForm::default();
    form.load(&recipe, category_options);
    Ok(form)
}

/// Validate, then create or update depending on the form's mode.
/// Invalid input never reaches the network.
pub async fn submit<A: RecipeApi + ?Sized>(api: &A, form: &RecipeForm) -> Result<Submitted, SubmitError> {
    let input = form.validate()?;
    match form.mode {
        FormMode::Create => {
            api.create_recipe(&input).await?;
            Ok(Submitted::Created)
        }
        FormMode::Edit(id) => {
            api.update_recipe(id, &input).await?;
            Ok(Submitted::Updated)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Declined,
    Deleted,
}

pub fn delete_prompt(name: &str) -> String {
    format!("Сигурни ли сте, че искате да изтриете \"{}\"?", name)
}

/// Ask first; only a confirmed delete is sent
pub async fn delete_recipe<A, C>(api: &A, confirm: &C, id: u32, name: &str) -> ApiResult<Deletion>
where
    A: RecipeApi + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(&delete_prompt(name)) {
        return Ok(Deletion::Declined);
    }
    api.delete_recipe(id).await?;
    Ok(Deletion::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::dialog::testing::ScriptedConfirm;
    use crate::models::make_recipe;

    fn options() -> Vec<String> {
        vec!["Десерти".to_string(), "Супи".to_string(), DEFAULT_CATEGORY.to_string()]
    }

    fn filled_form() -> RecipeForm {
        RecipeForm {
            name: "  Мусака ".into(),
            ingredients: "картофи, кайма".into(),
            instructions: "печи".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_category_order() {
        assert_eq!(resolve_category("Soups", "Other"), "Soups");
        assert_eq!(resolve_category("", "Desserts"), "Desserts");
        assert_eq!(resolve_category("", ""), DEFAULT_CATEGORY);
        assert_eq!(resolve_category("   ", NEW_CATEGORY_OPTION), DEFAULT_CATEGORY);
        assert_eq!(resolve_category("  Салати ", "Супи"), "Салати");
    }

    #[test]
    fn test_select_new_reveals_custom_input() {
        let mut choice = CategoryChoice::default();
        choice.select("Супи");
        assert_eq!(choice.effective(), "Супи");

        choice.select(NEW_CATEGORY_OPTION);
        assert!(choice.custom_visible);
        assert!(choice.selected.is_empty());
        choice.custom = "Салати".into();
        assert_eq!(choice.effective(), "Салати");

        choice.select("Десерти");
        assert!(!choice.custom_visible);
        assert!(choice.custom.is_empty());
        assert_eq!(choice.effective(), "Десерти");
    }

    #[test]
    fn test_set_unknown_category_goes_to_custom() {
        let mut choice = CategoryChoice::default();
        choice.set("Туршии", &options());
        assert_eq!(choice.selected, NEW_CATEGORY_OPTION);
        assert!(choice.custom_visible);
        assert_eq!(choice.effective(), "Туршии");

        choice.set("Супи", &options());
        assert_eq!(choice.selected, "Супи");
        assert!(!choice.custom_visible);
        assert!(choice.custom.is_empty());
    }

    #[test]
    fn test_validate_trims_and_requires_fields() {
        let input = filled_form().validate().unwrap();
        assert_eq!(input.name, "Мусака");
        assert_eq!(input.category.as_deref(), Some(DEFAULT_CATEGORY));

        let mut form = filled_form();
        form.instructions = " \n\t".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_labels_follow_mode() {
        let mut form = RecipeForm::default();
        assert_eq!(form.submit_label(), SUBMIT_CREATE_LABEL);
        form.load(&make_recipe(3, "Таратор", "Супи"), &options());
        assert!(form.is_editing());
        assert_eq!(form.submit_label(), SUBMIT_UPDATE_LABEL);
        form.reset();
        assert_eq!(form, RecipeForm::default());
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing() {
        let api = FakeApi::default();
        let form = RecipeForm { name: "x".into(), ..Default::default() };
        let err = submit(&api, &form).await.unwrap_err();
        assert_eq!(err.user_message(), MSG_FILL_ALL);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_posts() {
        let api = FakeApi::default();
        let outcome = submit(&api, &filled_form()).await.unwrap();
        assert_eq!(outcome, Submitted::Created);
        assert_eq!(api.calls(), vec!["POST /api/recipe"]);
    }

    #[tokio::test]
    async fn test_edit_round_trip_puts() {
        let api = FakeApi::with_recipes(vec![make_recipe(5, "Боб", "Супи")]);
        let mut form = edit_form(&api, 5, &options()).await.unwrap();
        assert_eq!(form.mode, FormMode::Edit(5));
        form.name = "Боб чорба".into();

        let outcome = submit(&api, &form).await.unwrap();
        assert_eq!(outcome, Submitted::Updated);
        assert_eq!(api.calls(), vec!["GET /api/recipe/5", "PUT /api/recipe/5"]);

        let body = &api.bodies.borrow()[0];
        assert_eq!(body.name, "Боб чорба");
        assert_eq!(body.category.as_deref(), Some("Супи"));
    }

    #[tokio::test]
    async fn test_server_error_text_is_surfaced() {
        let api = FakeApi::default();
        *api.fail_next.borrow_mut() = Some(ApiError::Server {
            status: 400,
            message: Some("Всички полета са задължителни".into()),
        });
        let err = submit(&api, &filled_form()).await.unwrap_err();
        assert_eq!(err.user_message(), "Всички полета са задължителни");
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let api = FakeApi::with_recipes(vec![make_recipe(8, "Баница", "Тестени")]);
        let confirm = ScriptedConfirm::new(false);
        let outcome = delete_recipe(&api, &confirm, 8, "Баница").await.unwrap();
        assert_eq!(outcome, Deletion::Declined);
        assert!(api.calls().is_empty());
        assert_eq!(*confirm.asked.borrow(), vec![delete_prompt("Баница")]);
        assert!(confirm.asked.borrow()[0].contains("\"Баница\""));
    }

    #[tokio::test]
    async fn test_confirmed_delete() {
        let api = FakeApi::with_recipes(vec![make_recipe(8, "Баница", "Тестени")]);
        let outcome = delete_recipe(&api, &ScriptedConfirm::new(true), 8, "Баница").await.unwrap();
        assert_eq!(outcome, Deletion::Deleted);
        assert_eq!(api.calls(), vec!["DELETE /api/recipe/8"]);
        assert!(api.recipes.borrow().is_empty());
    }
}
