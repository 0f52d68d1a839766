//! Books collection

use std::sync::Arc;

use tokio::sync::RwLock;

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

fn not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

/// In-memory book store, kept in insertion order
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by `query` on title or author, then return page `page` (1-based).
    ///
    /// Pages past the end, and non-positive `page` or `per_page`, yield an empty list.
    pub async fn search(&self, query: &str, page: i64, per_page: i64) -> Vec<Book> {
        let (Ok(page), Ok(per_page)) = (usize::try_from(page), usize::try_from(per_page)) else {
            return Vec::new();
        };
        if page == 0 || per_page == 0 {
            return Vec::new();
        }
        let Some(start) = (page - 1).checked_mul(per_page) else {
            return Vec::new();
        };

        let needle = query.to_lowercase();
        let books = self.books.read().await;
        books
            .iter()
            .filter(|book| book.matches(&needle))
            .skip(start)
            .take(per_page)
            .cloned()
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let id = parse_id(id).ok_or_else(not_found)?;
        let books = self.books.read().await;
        books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    pub async fn create(&self, data: CreateBook) -> Book {
        let book = Book::new(data);
        self.books.write().await.push(book.clone());
        book
    }

    pub async fn update(&self, id: &str, data: UpdateBook) -> AppResult<Book> {
        let id = parse_id(id).ok_or_else(not_found)?;
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(not_found)?;
        book.apply(data);
        Ok(book.clone())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id).ok_or_else(not_found)?;
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(not_found)?;
        books.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(repo: &BooksRepository, titles: &[(&str, &str)]) -> Vec<Book> {
        let mut created = Vec::new();
        for (title, author) in titles {
            created.push(
                repo.create(CreateBook {
                    title: Some(title.to_string()),
                    author: Some(author.to_string()),
                    year: None,
                })
                .await,
            );
        }
        created
    }

    #[tokio::test]
    async fn search_pages_through_filtered_books_in_insertion_order() {
        let repo = BooksRepository::new();
        let books = seed(
            &repo,
            &[
                ("Rust in Action", "McNamara"),
                ("Cooking", "Someone"),
                ("Programming RUST", "Blandy"),
                ("Zero to Production", "Palmieri, rust fan"),
                ("Gardening", "Nobody"),
                ("rustacean station", "Various"),
                ("The rust book", "Klabnik"),
            ],
        )
        .await;
        let matching: Vec<_> = [0, 2, 3, 5, 6].iter().map(|&i| books[i].id).collect();

        let page2: Vec<_> = repo.search("Rust", 2, 2).await.iter().map(|b| b.id).collect();
        assert_eq!(page2, matching[2..4]);

        let page3: Vec<_> = repo.search("Rust", 3, 2).await.iter().map(|b| b.id).collect();
        assert_eq!(page3, matching[4..]);

        assert!(repo.search("Rust", 4, 2).await.is_empty());
    }

    #[tokio::test]
    async fn search_rejects_non_positive_paging() {
        let repo = BooksRepository::new();
        seed(&repo, &[("Dune", "Herbert")]).await;

        assert!(repo.search("", 0, 5).await.is_empty());
        assert!(repo.search("", 1, 0).await.is_empty());
        assert!(repo.search("", -1, 5).await.is_empty());
        assert_eq!(repo.search("", 1, 5).await.len(), 1);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let repo = BooksRepository::new();
        let books = seed(&repo, &[("A", "a"), ("B", "b"), ("C", "c")]).await;
        assert_ne!(books[0].id, books[1].id);
        assert_ne!(books[1].id, books[2].id);
        assert_ne!(books[0].id, books[2].id);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let repo = BooksRepository::new();
        let book = seed(&repo, &[("Dune", "Herbert")]).await.remove(0);
        let id = book.id.to_string();

        repo.delete(&id).await.unwrap();

        assert!(matches!(repo.get_by_id(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(&id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let repo = BooksRepository::new();
        assert!(matches!(
            repo.get_by_id("not-a-uuid").await,
            Err(AppError::NotFound(_))
        ));
    }
}
