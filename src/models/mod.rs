//! Data models for the library server

pub mod book;
pub mod lenient;
pub mod member;
pub mod session;

// Re-export commonly used types
pub use book::{Book, BookQuery, CreateBook, UpdateBook};
pub use member::{CreateMember, Member, UpdateMember};
pub use session::Session;
