//! Catalog (books) service

use crate::{
    config::CatalogConfig,
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// Search books with pagination
    pub async fn search_books(&self, query: &BookQuery) -> Vec<Book> {
        let page = query.page.unwrap_or(1);
        let per_page = query
            .per_page
            .unwrap_or_else(|| i64::try_from(self.config.default_per_page).unwrap_or(i64::MAX));

        self.repository
            .books
            .search(query.q.as_deref().unwrap_or_default(), page, per_page)
            .await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create_book(&self, data: CreateBook) -> Book {
        let book = self.repository.books.create(data).await;
        tracing::info!(book_id = %book.id, "Book added");
        book
    }

    pub async fn update_book(&self, id: &str, data: UpdateBook) -> AppResult<Book> {
        let book = self.repository.books.update(id, data).await?;
        tracing::info!(book_id = %book.id, "Book updated");
        Ok(book)
    }

    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_uses_configured_page_size() {
        let service = CatalogService::new(Repository::new(), CatalogConfig { default_per_page: 3 });
        for i in 0..7 {
            service
                .create_book(CreateBook {
                    title: Some(format!("Volume {i}")),
                    ..Default::default()
                })
                .await;
        }

        assert_eq!(service.search_books(&BookQuery::default()).await.len(), 3);

        let last_page = BookQuery {
            page: Some(3),
            ..Default::default()
        };
        let books = service.search_books(&last_page).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title.as_deref(), Some("Volume 6"));
    }
}
