//! Members service

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Member> {
        self.repository.members.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateMember) -> Member {
        let member = self.repository.members.create(data).await;
        tracing::info!(member_id = %member.id, "Member added");
        member
    }

    pub async fn update(&self, id: &str, data: UpdateMember) -> AppResult<Member> {
        let member = self.repository.members.update(id, data).await?;
        tracing::info!(member_id = %member.id, "Member updated");
        Ok(member)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repository.members.delete(id).await?;
        tracing::info!(member_id = %id, "Member deleted");
        Ok(())
    }
}
