use std::collections::HashMap;
use std::sync::{
    Arc,
    atomic::{AtomicI32, Ordering},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{
    models::User,
    repositories::UserRepository,
    value_objects::{PageRequest, SortOrder},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i32, User>>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> anyhow::Result<User> {
        let mut users = self.users.write().await;
        let mut stored = user.clone();
        let id = match stored.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                stored.id = Some(id);
                id
            }
        };
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn exists(&self, id: i32) -> anyhow::Result<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn get(&self, id: i32) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        users.remove(&id);
        Ok(())
    }

    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> anyhow::Result<Vec<User>> {
        let users = self.users.read().await;
        let mut matches: Vec<User> = users
            .values()
            .filter(|user| user.birth_date >= from && user.birth_date <= to)
            .cloned()
            .collect();

        match page.sort {
            Some(SortOrder::Asc) => matches.sort_by_key(|user| user.birth_date),
            Some(SortOrder::Desc) => {
                matches.sort_by_key(|user| user.birth_date);
                matches.reverse();
            }
            // id order keeps unsorted pages stable across calls
            None => matches.sort_by_key(|user| user.id),
        }

        Ok(matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::fixtures;

    async fn seeded() -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::new();
        repo.save(&fixtures::john_doe()).await.unwrap(); // 1990-05-15
        repo.save(&fixtures::mike_smith()).await.unwrap(); // 1985-08-20
        repo.save(&fixtures::frank_jones()).await.unwrap(); // 1978-03-10
        repo
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let john = repo.save(&fixtures::john_doe()).await.unwrap();
        let mike = repo.save(&fixtures::mike_smith()).await.unwrap();

        assert_eq!(john.id, Some(1));
        assert_eq!(mike.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_id_overwrites_the_stored_record() {
        let repo = InMemoryUserRepository::new();
        let john = repo.save(&fixtures::john_doe()).await.unwrap();

        let replacement = User {
            id: john.id,
            address: None,
            ..fixtures::mike_smith()
        };
        repo.save(&replacement).await.unwrap();

        assert_eq!(repo.get(1).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn exists_and_get_report_missing_records() {
        let repo = seeded().await;

        assert!(repo.exists(2).await.unwrap());
        assert!(!repo.exists(999).await.unwrap());
        assert_eq!(repo.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn range_query_sorts_by_birth_date() {
        let repo = seeded().await;

        let asc = repo
            .find_by_birth_date_between(
                fixtures::date(1900, 1, 1),
                fixtures::date(2000, 1, 1),
                PageRequest::new(0, 20, Some(SortOrder::Asc)),
            )
            .await
            .unwrap();
        let birth_dates: Vec<NaiveDate> = asc.iter().map(|user| user.birth_date).collect();
        assert_eq!(
            birth_dates,
            [
                fixtures::date(1978, 3, 10),
                fixtures::date(1985, 8, 20),
                fixtures::date(1990, 5, 15),
            ]
        );

        let desc = repo
            .find_by_birth_date_between(
                fixtures::date(1900, 1, 1),
                fixtures::date(2000, 1, 1),
                PageRequest::new(0, 20, Some(SortOrder::Desc)),
            )
            .await
            .unwrap();
        assert_eq!(desc.first().map(|user| user.birth_date), Some(fixtures::date(1990, 5, 15)));
    }

    #[tokio::test]
    async fn range_query_pages_through_matches() {
        let repo = seeded().await;

        let second_page = repo
            .find_by_birth_date_between(
                fixtures::date(1900, 1, 1),
                fixtures::date(2000, 1, 1),
                PageRequest::new(1, 1, Some(SortOrder::Asc)),
            )
            .await
            .unwrap();

        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].birth_date, fixtures::date(1985, 8, 20));

        let past_the_end = repo
            .find_by_birth_date_between(
                fixtures::date(1900, 1, 1),
                fixtures::date(2000, 1, 1),
                PageRequest::new(5, 1, Some(SortOrder::Asc)),
            )
            .await
            .unwrap();
        assert!(past_the_end.is_empty());
    }
}
