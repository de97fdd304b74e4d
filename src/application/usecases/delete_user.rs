use std::sync::Arc;

use crate::domain::{errors::DomainError, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i32) -> Result<(), DomainError> {
        let user = self.repo.get(id).await?.ok_or(DomainError::NotFound)?;
        self.repo.delete(user.id.unwrap_or(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::usecases::fixtures,
        infrastructure::repositories::in_memory::InMemoryUserRepository,
    };

    #[tokio::test]
    async fn existing_user_is_removed() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.save(&fixtures::john_doe()).await.unwrap();
        let usecase = DeleteUserUseCase::new(repo.clone());

        usecase.execute(1).await.unwrap();

        assert_eq!(repo.get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn only_the_target_record_is_removed() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.save(&fixtures::john_doe()).await.unwrap();
        let mike = repo.save(&fixtures::mike_smith()).await.unwrap();
        let usecase = DeleteUserUseCase::new(repo.clone());

        usecase.execute(1).await.unwrap();

        assert_eq!(repo.get(2).await.unwrap(), Some(mike));
    }

    #[tokio::test]
    async fn unknown_id_is_rejected_without_a_deletion() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let stored = repo.save(&fixtures::john_doe()).await.unwrap();
        let usecase = DeleteUserUseCase::new(repo.clone());

        let err = usecase.execute(999).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound));
        assert_eq!(err.to_string(), "User not found.");
        assert_eq!(repo.get(1).await.unwrap(), Some(stored));
    }
}
