use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct CreateUserConfig {
    pub minimum_adult_age: u32,
}

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
    config: CreateUserConfig,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, config: CreateUserConfig) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, user: User) -> Result<User, DomainError> {
        let today = Utc::now().date_naive();
        if !is_adult(user.birth_date, today, self.config.minimum_adult_age) {
            return Err(DomainError::NotAdult {
                minimum_age: self.config.minimum_adult_age,
            });
        }

        // ids are assigned by the store on first insert
        let user = User { id: None, ..user };
        Ok(self.repo.save(&user).await?)
    }
}

fn is_adult(birth_date: NaiveDate, today: NaiveDate, minimum_adult_age: u32) -> bool {
    today
        .years_since(birth_date)
        .is_some_and(|age| age >= minimum_adult_age)
}
