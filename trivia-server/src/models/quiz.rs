//! Quiz request parsing
//!
//! Quiz clients are loose about how they name the category: a bare id,
//! a numeric string, or the whole `{id, type}` object they got from the
//! category listing. Id `0` is the "all categories" entry.

use serde::Deserialize;

use super::ValidationError;

/// Body of `POST /api/v1/quizzes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Ids already asked in this quiz.
    pub fn previous(&self) -> &[i32] {
        self.previous_questions.as_deref().unwrap_or_default()
    }

    /// Category the quiz is restricted to, `None` for all categories.
    pub fn category_id(&self) -> Result<Option<i32>, ValidationError> {
        match &self.quiz_category {
            Some(category) => category.category_id(),
            None => Ok(None),
        }
    }
}

/// A category id as sent by the client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Number(i32),
    Text(String),
}

/// `quiz_category` in any of its accepted shapes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Bare(CategoryRef),
    Object { id: CategoryRef },
}

impl QuizCategory {
    pub fn category_id(&self) -> Result<Option<i32>, ValidationError> {
        let raw = match self {
            Self::Bare(id) | Self::Object { id } => id,
        };

        let id = match raw {
            CategoryRef::Number(n) => *n,
            CategoryRef::Text(s) => {
                s.trim()
                    .parse::<i32>()
                    .map_err(|_| ValidationError::MalformedBody {
                        reason: format!("invalid quiz_category id '{}'", s),
                    })?
            }
        };

        Ok((id != 0).then_some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> QuizRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn empty_body_means_everything() {
        let req = parse("{}");
        assert!(req.previous().is_empty());
        assert_eq!(req.category_id(), Ok(None));
    }

    #[test]
    fn null_fields_are_accepted() {
        let req = parse(r#"{"previous_questions": null, "quiz_category": null}"#);
        assert!(req.previous().is_empty());
        assert_eq!(req.category_id(), Ok(None));
    }

    #[test]
    fn bare_category_id() {
        let req = parse(r#"{"previous_questions": [1, 2, 3], "quiz_category": 3}"#);
        assert_eq!(req.previous(), &[1, 2, 3]);
        assert_eq!(req.category_id(), Ok(Some(3)));
    }

    #[test]
    fn category_object_with_string_id() {
        let req = parse(r#"{"quiz_category": {"type": "Art", "id": "2"}}"#);
        assert_eq!(req.category_id(), Ok(Some(2)));
    }

    #[test]
    fn zero_is_all_categories() {
        let req = parse(r#"{"quiz_category": {"type": "click", "id": 0}}"#);
        assert_eq!(req.category_id(), Ok(None));
    }

    #[test]
    fn non_numeric_id_is_malformed() {
        let req = parse(r#"{"quiz_category": "art"}"#);
        assert!(matches!(
            req.category_id(),
            Err(ValidationError::MalformedBody { .. })
        ));
    }

    #[test]
    fn previous_must_be_integers() {
        let parsed = serde_json::from_str::<QuizRequest>(r#"{"previous_questions": ["a"]}"#);
        assert!(parsed.is_err());
    }
}
