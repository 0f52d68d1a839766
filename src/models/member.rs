//! Member model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::lenient;

/// Library member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Member {
    pub fn new(data: CreateMember) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
        }
    }

    /// Apply the fields present in `data`; `id` is not part of the update.
    pub fn apply(&mut self, data: UpdateMember) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
    }
}

/// Create member request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMember {
    #[serde(default, deserialize_with = "lenient::or_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_null")]
    pub email: Option<String>,
}

/// Update member request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMember {
    #[serde(default, deserialize_with = "lenient::present_or_null")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "lenient::present_or_null")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
}
