// src/db/admin_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::Admin};

#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn find_by_email<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<Option<Admin>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(executor)
            .await?;
        Ok(admin)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        admin_id: Uuid,
    ) -> Result<Option<Admin>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(admin_id)
            .fetch_optional(executor)
            .await?;
        Ok(admin)
    }

    pub async fn count<'e, E>(&self, executor: E) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    // Usado apenas pelo bootstrap de implantação, nunca por um handler.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        email: &str,
        password_hash: &str,
    ) -> Result<Admin, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let admin = sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(executor)
        .await?;
        Ok(admin)
    }
}
