//! Book model

use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::lenient;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Server-generated identifier, never changes
    pub id: Uuid,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Publication year, kept exactly as the JSON number that was sent
    #[schema(value_type = Option<f64>)]
    pub year: Option<Number>,
}

impl Book {
    /// Build a new book with a fresh identifier
    pub fn new(data: CreateBook) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: data.title,
            author: data.author,
            year: data.year,
        }
    }

    /// Apply the fields present in `data`; `id` is not part of the update.
    pub fn apply(&mut self, data: UpdateBook) {
        if let Some(title) = data.title {
            self.title = title;
        }
        if let Some(author) = data.author {
            self.author = author;
        }
        if let Some(year) = data.year {
            self.year = year;
        }
    }

    /// Case-insensitive substring match on title or author.
    ///
    /// `needle` must already be lowercase. A missing field matches as an empty string.
    pub fn matches(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
        };
        contains(&self.title) || contains(&self.author)
    }
}

/// Create book request
///
/// Missing or wrong-typed fields are stored as `null`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    #[serde(default, deserialize_with = "lenient::or_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_null")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_null")]
    #[schema(value_type = Option<f64>)]
    pub year: Option<Number>,
}

/// Update book request
///
/// Absent keys leave the field untouched; `null` or a wrong-typed value clears it.
/// Any other key in the body, `id` included, is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(default, deserialize_with = "lenient::present_or_null")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::present_or_null")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::present_or_null")]
    #[schema(value_type = Option<f64>)]
    pub year: Option<Option<Number>>,
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive search in title or author
    pub q: Option<String>,
    /// Page number, starting at 1 (default: 1)
    pub page: Option<i64>,
    /// Books per page (default: 5)
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::new(CreateBook {
            title: Some("Dune".into()),
            author: Some("Frank Herbert".into()),
            year: Some(Number::from(1965i64)),
        })
    }

    #[test]
    fn update_ignores_id_and_unknown_keys() {
        let mut book = sample();
        let id = book.id;
        let update: UpdateBook = serde_json::from_value(serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "title": "Dune Messiah",
            "isbn": "978-0441172696"
        }))
        .unwrap();

        book.apply(update);

        assert_eq!(book.id, id);
        assert_eq!(book.title.as_deref(), Some("Dune Messiah"));
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.year, Some(Number::from(1965i64)));
    }

    #[test]
    fn explicit_null_clears_field() {
        let mut book = sample();
        let update: UpdateBook =
            serde_json::from_value(serde_json::json!({ "year": null })).unwrap();

        book.apply(update);

        assert_eq!(book.year, None);
        assert_eq!(book.title.as_deref(), Some("Dune"));
    }

    #[test]
    fn wrong_typed_fields_become_null() {
        let data: CreateBook = serde_json::from_value(serde_json::json!({
            "title": 42,
            "author": "Frank Herbert",
            "year": "nineteen sixty-five"
        }))
        .unwrap();
        let book = Book::new(data);

        assert_eq!(book.title, None);
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.year, None);
    }

    #[test]
    fn fractional_year_is_kept() {
        let data: CreateBook =
            serde_json::from_value(serde_json::json!({ "year": 1965.0 })).unwrap();
        assert_eq!(data.year.as_ref().and_then(Number::as_f64), Some(1965.0));
    }

    #[test]
    fn matches_title_or_author_case_insensitively() {
        let book = sample();
        assert!(book.matches("dune"));
        assert!(book.matches("herbert"));
        assert!(book.matches(""));
        assert!(!book.matches("asimov"));
    }

    #[test]
    fn missing_fields_match_only_empty_needle() {
        let book = Book::new(CreateBook::default());
        assert!(book.matches(""));
        assert!(!book.matches("a"));
    }
}
