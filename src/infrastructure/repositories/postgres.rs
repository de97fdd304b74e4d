use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};

use crate::domain::{
    models::User,
    repositories::UserRepository,
    value_objects::{PageRequest, SortOrder},
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> anyhow::Result<User> {
        let record = match user.id {
            Some(id) => {
                sqlx::query_as::<_, UserRecord>(
                    r#"
                    UPDATE users
                    SET email = $2,
                        first_name = $3,
                        last_name = $4,
                        birth_date = $5,
                        address = $6,
                        phone_number = $7
                    WHERE id = $1
                    RETURNING id, email, first_name, last_name, birth_date, address, phone_number
                    "#,
                )
                .bind(id)
                .bind(&user.email)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.birth_date)
                .bind(&user.address)
                .bind(&user.phone_number)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, UserRecord>(
                    r#"
                    INSERT INTO users (email, first_name, last_name, birth_date, address, phone_number)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id, email, first_name, last_name, birth_date, address, phone_number
                    "#,
                )
                .bind(&user.email)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.birth_date)
                .bind(&user.address)
                .bind(&user.phone_number)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(User::from(record))
    }

    async fn exists(&self, id: i32) -> anyhow::Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn get(&self, id: i32) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, first_name, last_name, birth_date, address, phone_number
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        page: PageRequest,
    ) -> anyhow::Result<Vec<User>> {
        // ORDER BY direction cannot be bound as a parameter
        let order_by = match page.sort {
            Some(SortOrder::Asc) => " ORDER BY birth_date ASC",
            Some(SortOrder::Desc) => " ORDER BY birth_date DESC",
            None => "",
        };
        let sql = format!(
            "SELECT id, email, first_name, last_name, birth_date, address, phone_number \
             FROM users \
             WHERE birth_date BETWEEN $1 AND $2{order_by} \
             LIMIT $3 OFFSET $4"
        );

        let rows = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(from)
            .bind(to)
            .bind(i64::from(page.size))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i32,
    email: String,
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    address: Option<String>,
    phone_number: Option<String>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: Some(value.id),
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
            birth_date: value.birth_date,
            address: value.address,
            phone_number: value.phone_number,
        }
    }
}
