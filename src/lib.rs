//! Library Management System
//!
//! A small REST JSON API for managing a library's books and members, with
//! bearer-token sessions. All state is held in memory for the lifetime of
//! the process.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build state over a fresh, empty store
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new();
        let services = services::Services::new(repository, config.catalog.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
