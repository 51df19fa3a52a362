// src/db/contact_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::contact::{ContactMessage, ContactStatus, CreateContactPayload},
};

#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        payload: &CreateContactPayload,
    ) -> Result<ContactMessage, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let message = sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (name, email, subject, message, is_from_seller, seller_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.subject)
        .bind(&payload.message)
        .bind(payload.is_from_seller)
        .bind(payload.seller_id)
        .fetch_one(executor)
        .await?;
        Ok(message)
    }

    // Mais recentes primeiro: contrato estrito do painel ("most recent first").
    pub async fn list<'e, E>(
        &self,
        executor: E,
        email: Option<&str>,
    ) -> Result<Vec<ContactMessage>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages \
             WHERE ($1::TEXT IS NULL OR email = $1) \
             ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(executor)
        .await?;
        Ok(messages)
    }

    pub async fn update_response<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        response: &str,
        status: ContactStatus,
    ) -> Result<Option<ContactMessage>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let message = sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages \
             SET response = $2, status = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(response)
        .bind(status)
        .fetch_optional(executor)
        .await?;
        Ok(message)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
