use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{models::User, value_objects::PageRequest};

/// Durable keyed storage for user records. `save` inserts when the user has
/// no id yet and fully overwrites the row otherwise.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> anyhow::Result<User>;
    async fn exists(&self, id: i32) -> anyhow::Result<bool>;
    async fn get(&self, id: i32) -> anyhow::Result<Option<User>>;
    async fn delete(&self, id: i32) -> anyhow::Result<()>;
    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> anyhow::Result<Vec<User>>;
}
