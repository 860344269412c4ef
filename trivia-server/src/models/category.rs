//! Question categories

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The six categories a fresh trivia database is seeded with.
pub const DEFAULT_CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Category row. Serialized as `{id, type}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// [`DEFAULT_CATEGORIES`] as rows.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|&(id, kind)| Category::new(id, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_kind_as_type() {
        let value = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(value, json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn default_ids_are_sequential() {
        let ids: Vec<i32> = default_categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
