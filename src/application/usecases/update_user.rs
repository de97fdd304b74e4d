use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Full replacement: every stored field is overwritten with the input,
    /// including clearing optional fields the input leaves unset.
    pub async fn execute(&self, user: User) -> Result<User, DomainError> {
        let id = user.id.ok_or(DomainError::NotFound)?;

        if !self.repo.exists(id).await? {
            return Err(DomainError::NotFound);
        }
        Ok(self.repo.save(&user).await?)
    }
}
