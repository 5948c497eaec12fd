//! Field validation for recipe writes.
//!
//! Pure functions over the request payload; nothing here touches the store,
//! so the same checks apply no matter what the records are persisted in.
//! Every violation produces its own message and all of them are reported
//! together, not just the first one found.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Meal category. Unknown values are rejected at validation time;
/// a missing category falls back to `Dinner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Dessert,
    Snack,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
        }
    }

    pub fn parse(raw: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The writable recipe fields, all optional. Create requests deserialize
/// straight into this; update requests become one after merging with the
/// current row.
#[derive(Debug, Default, Clone)]
pub struct RecipeDraft {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub category: Option<String>,
}

/// A draft that passed every constraint.
#[derive(Debug, Clone)]
pub struct ValidRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: Category,
}

/// Check a draft against the schema constraints, collecting one message per
/// violated field.
pub fn validate(draft: RecipeDraft) -> Result<ValidRecipe, Vec<String>> {
    let mut problems = Vec::new();

    let title = draft
        .title
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    if title.is_empty() {
        problems.push("Please add a title for the recipe".to_string());
    } else if title.chars().count() > TITLE_MAX_CHARS {
        problems.push("Title cannot be more than 100 characters".to_string());
    }

    let ingredients = draft.ingredients.unwrap_or_default();
    if ingredients.is_empty() {
        problems.push("Please add ingredients".to_string());
    }

    let steps = draft.steps.unwrap_or_default();
    if steps.is_empty() {
        problems.push("Please add cooking steps".to_string());
    }

    let category = match draft.category {
        None => Category::default(),
        Some(raw) => match Category::parse(&raw) {
            Some(c) => c,
            None => {
                problems.push(format!(
                    "`{raw}` is not a valid category (expected one of Breakfast, Lunch, Dinner, Dessert, Snack)"
                ));
                Category::default()
            }
        },
    };

    if problems.is_empty() {
        Ok(ValidRecipe {
            title,
            ingredients,
            steps,
            category,
        })
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> RecipeDraft {
        RecipeDraft {
            title: Some("Toast".to_string()),
            ingredients: Some(vec!["bread".to_string()]),
            steps: Some(vec!["toast it".to_string()]),
            category: None,
        }
    }

    #[test]
    fn valid_draft_defaults_category_to_dinner() {
        let valid = validate(full_draft()).unwrap();
        assert_eq!(valid.title, "Toast");
        assert_eq!(valid.category, Category::Dinner);
    }

    #[test]
    fn explicit_category_is_kept() {
        let mut draft = full_draft();
        draft.category = Some("Snack".to_string());
        assert_eq!(validate(draft).unwrap().category, Category::Snack);
    }

    #[test]
    fn title_is_trimmed() {
        let mut draft = full_draft();
        draft.title = Some("  Toast  ".to_string());
        assert_eq!(validate(draft).unwrap().title, "Toast");
    }

    #[test]
    fn missing_title_is_reported() {
        let mut draft = full_draft();
        draft.title = None;
        let problems = validate(draft).unwrap_err();
        assert_eq!(problems, vec!["Please add a title for the recipe"]);
    }

    #[test]
    fn blank_title_is_reported() {
        let mut draft = full_draft();
        draft.title = Some("   ".to_string());
        let problems = validate(draft).unwrap_err();
        assert_eq!(problems, vec!["Please add a title for the recipe"]);
    }

    #[test]
    fn overlong_title_is_reported() {
        let mut draft = full_draft();
        draft.title = Some("x".repeat(101));
        let problems = validate(draft).unwrap_err();
        assert_eq!(problems, vec!["Title cannot be more than 100 characters"]);
    }

    #[test]
    fn title_of_exactly_100_chars_is_allowed() {
        let mut draft = full_draft();
        draft.title = Some("x".repeat(100));
        assert!(validate(draft).is_ok());
    }

    #[test]
    fn empty_ingredients_and_steps_are_both_reported() {
        let draft = RecipeDraft {
            title: Some("Toast".to_string()),
            ingredients: Some(vec![]),
            steps: None,
            category: None,
        };
        let problems = validate(draft).unwrap_err();
        assert_eq!(
            problems,
            vec!["Please add ingredients", "Please add cooking steps"]
        );
    }

    #[test]
    fn unknown_category_is_reported() {
        let mut draft = full_draft();
        draft.category = Some("Brunch".to_string());
        let problems = validate(draft).unwrap_err();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("Brunch"));
    }

    #[test]
    fn category_parse_is_case_sensitive() {
        assert_eq!(Category::parse("Dinner"), Some(Category::Dinner));
        assert_eq!(Category::parse("dinner"), None);
    }

    #[test]
    fn every_violation_is_collected() {
        let draft = RecipeDraft {
            title: None,
            ingredients: None,
            steps: None,
            category: Some("Midnight".to_string()),
        };
        let problems = validate(draft).unwrap_err();
        assert_eq!(problems.len(), 4);
    }
}
