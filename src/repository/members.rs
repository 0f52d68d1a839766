//! Members collection

use std::sync::Arc;

use tokio::sync::RwLock;

use super::parse_id;
use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
};

fn not_found() -> AppError {
    AppError::NotFound("Member not found".to_string())
}

/// In-memory member store, kept in insertion order
#[derive(Clone, Default)]
pub struct MembersRepository {
    members: Arc<RwLock<Vec<Member>>>,
}

impl MembersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Member> {
        self.members.read().await.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Member> {
        let id = parse_id(id).ok_or_else(not_found)?;
        let members = self.members.read().await;
        members
            .iter()
            .find(|member| member.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    pub async fn create(&self, data: CreateMember) -> Member {
        let member = Member::new(data);
        self.members.write().await.push(member.clone());
        member
    }

    pub async fn update(&self, id: &str, data: UpdateMember) -> AppResult<Member> {
        let id = parse_id(id).ok_or_else(not_found)?;
        let mut members = self.members.write().await;
        let member = members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or_else(not_found)?;
        member.apply(data);
        Ok(member.clone())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id).ok_or_else(not_found)?;
        let mut members = self.members.write().await;
        let index = members
            .iter()
            .position(|member| member.id == id)
            .ok_or_else(not_found)?;
        members.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_returns_members_in_insertion_order() {
        let repo = MembersRepository::new();
        let first = repo
            .create(CreateMember {
                name: Some("Ada".into()),
                email: None,
            })
            .await;
        let second = repo.create(CreateMember::default()).await;

        let ids: Vec<_> = repo.list().await.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn update_unknown_member_is_not_found() {
        let repo = MembersRepository::new();
        let result = repo
            .update(&uuid::Uuid::new_v4().to_string(), UpdateMember::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Member not found"));
    }
}
