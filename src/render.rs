//! Markup Rendering
//!
//! Pure functions from records to HTML strings. Views inject the result with
//! `inner_html`, so every user-supplied field goes through `escape_html`.

use crate::api::encode_component;
use crate::models::{CategorySummary, Recipe};

/// Ingredients longer than this are cut on card previews
pub const INGREDIENT_PREVIEW_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// First `INGREDIENT_PREVIEW_CHARS` characters, with `...` when cut
pub fn ingredient_preview(ingredients: &str) -> String {
    match ingredients.char_indices().nth(INGREDIENT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &ingredients[..cut], ELLIPSIS),
        None => ingredients.to_string(),
    }
}

/// "1 рецепта" / "N рецепти"
pub fn recipe_count_label(count: u32) -> String {
    if count == 1 {
        "1 рецепта".to_string()
    } else {
        format!("{} рецепти", count)
    }
}

pub fn recipe_href(id: u32) -> String {
    format!("/recipe/{}", id)
}

pub fn category_href(name: &str) -> String {
    format!("/category/{}", encode_component(name))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Show the category badge (global search results)
    pub show_category: bool,
}

pub fn render_empty_state() -> String {
    r#"<div class="empty-state" style="grid-column: 1 / -1;"><div class="empty-state-icon">🔍</div><h3>Няма намерени рецепти</h3><p>Опитайте с друго търсене</p></div>"#
        .to_string()
}

pub fn render_recipe_card(recipe: &Recipe, options: CardOptions) -> String {
    let badge = if options.show_category {
        format!(
            r#"<p class="recipe-category-badge-small">📂 {}</p>"#,
            escape_html(&recipe.category)
        )
    } else {
        String::new()
    };

    format!(
        r#"<a class="recipe-card" href="{}"><h3>{}</h3>{}<p>{}</p></a>"#,
        recipe_href(recipe.id),
        escape_html(&recipe.name),
        badge,
        escape_html(&ingredient_preview(&recipe.ingredients)),
    )
}

/// Cards for `recipes` in order, or the placeholder when there are none
pub fn render_recipe_grid(recipes: &[Recipe], options: CardOptions) -> String {
    if recipes.is_empty() {
        return render_empty_state();
    }
    recipes
        .iter()
        .map(|recipe| render_recipe_card(recipe, options))
        .collect()
}

/// Category tiles for the index page
pub fn render_category_grid(categories: &[CategorySummary]) -> String {
    if categories.is_empty() {
        return r#"<div class="empty-state" style="grid-column: 1 / -1;"><div class="empty-state-icon">📂</div><h3>Все още няма рецепти</h3><p>Добавете първата от администрацията</p></div>"#
            .to_string();
    }
    categories
        .iter()
        .map(|c| {
            format!(
                r#"<a class="category-card" href="{}"><h3>📂 {}</h3><p>{}</p></a>"#,
                category_href(&c.category),
                escape_html(&c.category),
                recipe_count_label(c.count),
            )
        })
        .collect()
}
