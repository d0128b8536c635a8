use std::collections::HashSet;

use serde::Deserialize;
use utoipa::ToSchema;

use super::entities::CategoryId;
use super::patch_field::PatchField;

pub const TITLE_MAX_CHARS: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsFormError {
    #[error("body cannot be empty")]
    BodyEmpty,

    #[error("title length must be between 1 and {}", TITLE_MAX_CHARS)]
    TitleLength,

    #[error("content cannot be empty")]
    ContentEmpty,

    #[error("{0} cannot be null")]
    NullField(&'static str),

    #[error("category id must be positive, got {0}")]
    InvalidCategoryId(CategoryId),
}

impl NewsFormError {
    /// Stable machine-readable code for the API error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            NewsFormError::BodyEmpty => "EMPTY_BODY",
            NewsFormError::TitleLength => "INVALID_TITLE",
            NewsFormError::ContentEmpty => "INVALID_CONTENT",
            NewsFormError::NullField(_) => "NULL_FIELD",
            NewsFormError::InvalidCategoryId(_) => "INVALID_CATEGORY",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Create form
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateNewsForm {
    #[schema(example = "Medicine")]
    pub title: String,

    #[schema(example = "New treatment approved")]
    pub content: String,

    /// Absent, null and `[]` all mean "no categories".
    #[serde(default)]
    #[schema(example = json!([1, 2]))]
    pub categories: Option<Vec<CategoryId>>,
}

impl CreateNewsForm {
    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();

        if let Some(categories) = self.categories.as_mut() {
            dedup_categories(categories);
        }
    }

    pub fn validate(&self) -> Result<(), NewsFormError> {
        validate_title(&self.title)?;
        validate_content(&self.content)?;

        if let Some(categories) = &self.categories {
            validate_categories(categories)?;
        }

        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Edit form (sparse)
// ──────────────────────────────────────────────────────────
//

/// Every field is independently Unset (leave alone) or Value (overwrite).
/// `categories: []` is a Value and clears every association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EditNewsForm {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Medicine")]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub content: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<i64>>, example = json!([3]))]
    pub categories: PatchField<Vec<CategoryId>>,
}

impl EditNewsForm {
    pub fn normalize(&mut self) {
        if let Some(title) = self.title.as_value_mut() {
            *title = title.trim().to_string();
        }

        if let Some(content) = self.content.as_value_mut() {
            *content = content.trim().to_string();
        }

        if let Some(categories) = self.categories.as_value_mut() {
            dedup_categories(categories);
        }
    }

    pub fn validate(&self) -> Result<(), NewsFormError> {
        if self.title.is_unset() && self.content.is_unset() && self.categories.is_unset() {
            return Err(NewsFormError::BodyEmpty);
        }

        match &self.title {
            PatchField::Unset => {}
            PatchField::Null => return Err(NewsFormError::NullField("title")),
            PatchField::Value(title) => validate_title(title)?,
        }

        match &self.content {
            PatchField::Unset => {}
            PatchField::Null => return Err(NewsFormError::NullField("content")),
            PatchField::Value(content) => validate_content(content)?,
        }

        match &self.categories {
            PatchField::Unset => {}
            PatchField::Null => return Err(NewsFormError::NullField("categories")),
            PatchField::Value(categories) => validate_categories(categories)?,
        }

        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Rules shared by both forms
// ──────────────────────────────────────────────────────────
//

fn validate_title(title: &str) -> Result<(), NewsFormError> {
    let len = title.chars().count();
    if len < 1 || len > TITLE_MAX_CHARS {
        return Err(NewsFormError::TitleLength);
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), NewsFormError> {
    if content.is_empty() {
        return Err(NewsFormError::ContentEmpty);
    }
    Ok(())
}

fn validate_categories(categories: &[CategoryId]) -> Result<(), NewsFormError> {
    match categories.iter().find(|id| **id <= 0) {
        Some(id) => Err(NewsFormError::InvalidCategoryId(*id)),
        None => Ok(()),
    }
}

/// Keeps the first occurrence of each id.
fn dedup_categories(categories: &mut Vec<CategoryId>) {
    let mut seen = HashSet::with_capacity(categories.len());
    categories.retain(|id| seen.insert(*id));
}
