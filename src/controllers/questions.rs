//! Template question list projection.

use crate::models::Question;

/// One rendered question row
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRow {
    pub key: String,
    pub title: String,
    pub tag_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionListing {
    Empty,
    Rows(Vec<QuestionRow>),
}

impl QuestionListing {
    pub fn from_questions(questions: &[Question]) -> Self {
        if questions.is_empty() {
            return Self::Empty;
        }
        Self::Rows(
            questions
                .iter()
                .map(|question| QuestionRow {
                    key: question.id.clone(),
                    title: question.question_title.clone(),
                    tag_name: question.tag_name.clone(),
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, title: &str) -> Question {
        Question {
            id: id.to_string(),
            question_title: title.to_string(),
            tag_name: "tag".to_string(),
        }
    }

    #[test]
    fn test_empty_list_is_placeholder_only() {
        let listing = QuestionListing::from_questions(&[]);
        assert!(listing.is_empty());
        assert_eq!(listing, QuestionListing::Empty);
    }

    #[test]
    fn test_one_row_per_question_keyed_by_id() {
        let listing = QuestionListing::from_questions(&[question("a", "First"), question("b", "Second")]);
        let QuestionListing::Rows(rows) = listing else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "a");
        assert_eq!(rows[0].title, "First");
        assert_eq!(rows[1].key, "b");
        assert_eq!(rows[1].tag_name, "tag");
    }
}
