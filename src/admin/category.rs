//! Category Admin Controller
//!
//! Rename and delete of categories. Both end in a full page reload on success,
//! which the caller performs.

use crate::api::RecipeApi;
use crate::dialog::Confirm;
use crate::error::{ApiError, ValidationError};
use crate::models::DEFAULT_CATEGORY;

pub const MSG_ENTER_NAME: &str = "Моля въведете ново име";
pub const MSG_RENAMED: &str = "Категорията е преименувана успешно";
pub const MSG_RENAME_FAILED: &str = "Грешка при преименуване";
pub const MSG_CATEGORY_DELETED: &str = "Категорията е изтрита";
pub const MSG_CATEGORY_DELETE_FAILED: &str = "Грешка при изтриване";

/// State of the rename modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameDraft {
    pub old_name: String,
    pub new_name: String,
}

impl RenameDraft {
    /// Open the modal for `category`, pre-filled with its current name
    pub fn open(category: &str) -> Self {
        Self { old_name: category.to_string(), new_name: category.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenameOutcome {
    /// Name unchanged; close the modal without a request
    Unchanged,
    Renamed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome {
    Declined,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CategoryError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CategoryError {
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            CategoryError::Invalid(_) => MSG_ENTER_NAME.to_string(),
            CategoryError::Api(err) => err.user_message(fallback, super::MSG_CONNECTION),
        }
    }
}

/// Only user-created categories can be renamed or deleted
pub fn is_editable(category: &str) -> bool {
    category != DEFAULT_CATEGORY
}

pub async fn rename_category<A: RecipeApi + ?Sized>(
    api: &A,
    draft: &RenameDraft,
) -> Result<RenameOutcome, CategoryError> {
    let new_name = draft.new_name.trim();
    if new_name.is_empty() {
        return Err(ValidationError::EmptyCategoryName.into());
    }
    if new_name == draft.old_name {
        return Ok(RenameOutcome::Unchanged);
    }
    api.rename_category(&draft.old_name, new_name).await?;
    log::info!("[CATEGORY] renamed {:?} -> {:?}", draft.old_name, new_name);
    Ok(RenameOutcome::Renamed)
}

/// Confirmation text; warns where affected recipes will go
pub fn delete_category_prompt(category: &str, recipe_count: u32) -> String {
    let mut message = format!("Сигурни ли сте, че искате да изтриете категорията \"{}\"?", category);
    if recipe_count > 0 {
        let (noun, verb) = if recipe_count == 1 {
            ("рецепта", "бъде преместена")
        } else {
            ("рецепти", "бъдат преместени")
        };
        message.push_str(&format!(
            "\n\n{} {} ще {} в категория \"{}\".",
            recipe_count, noun, verb, DEFAULT_CATEGORY
        ));
    }
    message
}

pub async fn delete_category<A, C>(
    api: &A,
    confirm: &C,
    category: &str,
    recipe_count: u32,
) -> Result<CategoryOutcome, CategoryError>
where
    A: RecipeApi + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(&delete_category_prompt(category, recipe_count)) {
        return Ok(CategoryOutcome::Declined);
    }
    api.delete_category(category).await?;
    log::info!("[CATEGORY] deleted {:?} ({} recipes moved)", category, recipe_count);
    Ok(CategoryOutcome::Deleted)
}
