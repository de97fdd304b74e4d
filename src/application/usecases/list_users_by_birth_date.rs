use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    errors::DomainError, models::User, repositories::UserRepository, value_objects::PageRequest,
};

pub struct ListUsersByBirthDateUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersByBirthDateUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Inclusive on both bounds; `from == to` returns exact-date matches.
    pub async fn execute(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> Result<Vec<User>, DomainError> {
        if from > to {
            return Err(DomainError::BirthDateRangeOutOfOrder);
        }
        Ok(self.repo.find_by_birth_date_between(from, to, page).await?)
    }
}
