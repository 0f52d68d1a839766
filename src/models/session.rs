//! Session model

/// The single account accepted by `POST /login`
pub const ADMIN_PRINCIPAL: &str = "admin";

/// An authenticated session, resolved from a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub principal: String,
}
