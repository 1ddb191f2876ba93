use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::entities::{NewUser, User, UserEmail, UserRef};
use crate::domain::value_objects::UserId;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<UserEmail>, RepositoryError> {
        let rows = sqlx::query_as::<_, (String,)>(
            r#"
            SELECT email
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(email,)| UserEmail { email })
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Vec<UserRef>, RepositoryError> {
        let rows = sqlx::query_as::<_, (i32,)>(
            r#"
            SELECT id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id,)| UserRef {
                id: UserId::new(id),
            })
            .collect())
    }

    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}
