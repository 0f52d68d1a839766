//! Business logic services

pub mod auth;
pub mod catalog;
pub mod members;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(repository: Repository, catalog_config: CatalogConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone(), catalog_config),
            members: members::MembersService::new(repository),
        }
    }
}
