//! In-memory storage for books, members and sessions
//!
//! All state lives for the lifetime of the process. Each collection sits
//! behind its own lock, held for the whole of a scan-and-mutate step.

pub mod books;
pub mod members;
pub mod sessions;

use uuid::Uuid;

/// Store holding every collection; cheap to clone, clones share state
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub sessions: sessions::SessionsRepository,
}

impl Repository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
            members: members::MembersRepository::new(),
            sessions: sessions::SessionsRepository::new(),
        }
    }
}

/// Ids match exactly as issued: lowercase and hyphenated. Any other
/// spelling, even of a valid UUID, matches no record.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::try_parse(id)
        .ok()
        .filter(|uuid| uuid.hyphenated().to_string() == id)
}
