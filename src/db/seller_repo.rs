// src/db/seller_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::seller::{Seller, SellerOverview, UpdateSellerProfilePayload},
};

// Projeção administrativa: tudo menos credenciais e dados bancários.
const SELLER_OVERVIEW: &str = "SELECT id, seller_name, store_name, email, phone, bio, \
       business_type, verification_status, is_blocked, \
       total_products, total_orders, ratings, created_at \
  FROM sellers";

#[derive(Clone)]
pub struct SellerRepository {
    pool: PgPool,
}

impl SellerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        seller_name: &str,
        store_name: &str,
        email: &str,
        password_hash: &str,
        phone: &str,
        bio: Option<&str>,
    ) -> Result<Seller, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Seller>(
            "INSERT INTO sellers (seller_name, store_name, email, password_hash, phone, bio) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(seller_name)
        .bind(store_name)
        .bind(email)
        .bind(password_hash)
        .bind(phone)
        .bind(bio)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })
    }

    pub async fn find_by_email<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<Option<Seller>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let seller = sqlx::query_as::<_, Seller>("SELECT * FROM sellers WHERE email = $1")
            .bind(email)
            .fetch_optional(executor)
            .await?;
        Ok(seller)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
    ) -> Result<Option<Seller>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let seller = sqlx::query_as::<_, Seller>("SELECT * FROM sellers WHERE id = $1")
            .bind(seller_id)
            .fetch_optional(executor)
            .await?;
        Ok(seller)
    }

    pub async fn list_overviews<'e, E>(&self, executor: E) -> Result<Vec<SellerOverview>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{SELLER_OVERVIEW} ORDER BY created_at DESC");
        let sellers = sqlx::query_as::<_, SellerOverview>(&sql)
            .fetch_all(executor)
            .await?;
        Ok(sellers)
    }

    pub async fn overview_by_id<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
    ) -> Result<Option<SellerOverview>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{SELLER_OVERVIEW} WHERE id = $1");
        let seller = sqlx::query_as::<_, SellerOverview>(&sql)
            .bind(seller_id)
            .fetch_optional(executor)
            .await?;
        Ok(seller)
    }

    pub async fn set_blocked<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        is_blocked: bool,
    ) -> Result<Option<SellerOverview>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let seller = sqlx::query_as::<_, SellerOverview>(
            "UPDATE sellers SET is_blocked = $2, updated_at = now() WHERE id = $1 \
             RETURNING id, seller_name, store_name, email, phone, bio, \
                       business_type, verification_status, is_blocked, \
                       total_products, total_orders, ratings, created_at",
        )
        .bind(seller_id)
        .bind(is_blocked)
        .fetch_optional(executor)
        .await?;
        Ok(seller)
    }

    pub async fn delete<'e, E>(&self, executor: E, seller_id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM sellers WHERE id = $1")
            .bind(seller_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // Atualização parcial do perfil: campos ausentes mantêm o valor atual.
    pub async fn update_profile<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        update: &UpdateSellerProfilePayload,
    ) -> Result<Option<Seller>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let seller = sqlx::query_as::<_, Seller>(
            "UPDATE sellers \
             SET seller_name = COALESCE($2, seller_name), \
                 store_name = COALESCE($3, store_name), \
                 phone = COALESCE($4, phone), \
                 bio = COALESCE($5, bio), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(seller_id)
        .bind(&update.seller_name)
        .bind(&update.store_name)
        .bind(&update.phone)
        .bind(&update.bio)
        .fetch_optional(executor)
        .await?;
        Ok(seller)
    }
}
