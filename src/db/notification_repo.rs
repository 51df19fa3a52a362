// src/db/notification_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::notification::{Notification, RecipientModel},
};

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        recipient: Uuid,
        recipient_model: RecipientModel,
        message: &str,
        link: Option<&str>,
    ) -> Result<Notification, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (recipient, recipient_model, message, link) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(recipient)
        .bind(recipient_model)
        .bind(message)
        .bind(link)
        .fetch_one(executor)
        .await?;
        Ok(notification)
    }

    // Fan-out em lote: uma notificação por admin existente, numa única
    // instrução. Zero admins resulta em zero linhas, sem fallback.
    pub async fn insert_for_admins<'e, E>(
        &self,
        executor: E,
        message: &str,
        link: Option<&str>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "INSERT INTO notifications (recipient, recipient_model, message, link) \
             SELECT id, 'Admin', $1, $2 FROM admins",
        )
        .bind(message)
        .bind(link)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_for<'e, E>(
        &self,
        executor: E,
        recipient: Uuid,
        recipient_model: RecipientModel,
    ) -> Result<Vec<Notification>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE recipient = $1 AND recipient_model = $2 \
             ORDER BY created_at DESC",
        )
        .bind(recipient)
        .bind(recipient_model)
        .fetch_all(executor)
        .await?;
        Ok(notifications)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Notification>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let notification =
            sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(notification)
    }

    pub async fn mark_read<'e, E>(&self, executor: E, id: Uuid) -> Result<Notification, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let notification = sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(executor)
        .await?;
        Ok(notification)
    }

    // Idempotente: só toca nas linhas ainda não lidas.
    pub async fn mark_all_read<'e, E>(
        &self,
        executor: E,
        recipient: Uuid,
        recipient_model: RecipientModel,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE notifications SET read = TRUE \
             WHERE recipient = $1 AND recipient_model = $2 AND read = FALSE",
        )
        .bind(recipient)
        .bind(recipient_model)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
