use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned news identifier.
pub type NewsId = i64;

/// Opaque category identifier; the catalog itself lives elsewhere.
pub type CategoryId = i64;

/// Read model: one news row with every category it is linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsWithCategories {
    #[schema(example = 1)]
    pub id: NewsId,

    #[schema(example = "Medicine")]
    pub title: String,

    #[schema(example = "New treatment approved")]
    pub content: String,

    /// Never null: empty when the news has no categories.
    #[schema(example = json!([1, 2]))]
    pub categories: Vec<CategoryId>,
}
