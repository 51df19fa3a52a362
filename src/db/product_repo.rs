// src/db/product_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::product::{ApprovalStatus, Product, ProductSellerRow, SubmitProductPayload},
};

// Consulta base: produto + projeção uniforme do vendedor (nome, loja,
// e-mail, telefone). Campos bancários/credenciais nunca entram aqui.
const PRODUCT_WITH_SELLER: &str = "SELECT p.*, \
       s.seller_name, s.store_name, \
       s.email AS seller_email, s.phone AS seller_phone \
  FROM products p \
  JOIN sellers s ON s.id = p.seller_id";

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Pool compartilhada: os serviços usam como executor padrão e para
    // abrir transações.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ---
    // Leituras
    // ---

    // Lista por status de aprovação. `pending` (ou ausência de filtro)
    // também captura registros legados com a coluna NULL.
    pub async fn list_with_seller<'e, E>(
        &self,
        executor: E,
        status: Option<ApprovalStatus>,
    ) -> Result<Vec<ProductSellerRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = match status {
            None | Some(ApprovalStatus::Pending) => {
                let sql = format!(
                    "{PRODUCT_WITH_SELLER} WHERE p.approval_status = 'pending' \
                     OR p.approval_status IS NULL ORDER BY p.created_at DESC"
                );
                sqlx::query_as::<_, ProductSellerRow>(&sql)
                    .fetch_all(executor)
                    .await?
            }
            Some(status) => {
                let sql = format!(
                    "{PRODUCT_WITH_SELLER} WHERE p.approval_status = $1 ORDER BY p.created_at DESC"
                );
                sqlx::query_as::<_, ProductSellerRow>(&sql)
                    .bind(status)
                    .fetch_all(executor)
                    .await?
            }
        };
        Ok(rows)
    }

    pub async fn find_with_seller<'e, E>(
        &self,
        executor: E,
        product_id: Uuid,
    ) -> Result<Option<ProductSellerRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{PRODUCT_WITH_SELLER} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProductSellerRow>(&sql)
            .bind(product_id)
            .fetch_optional(executor)
            .await?;
        Ok(row)
    }

    pub async fn exists<'e, E>(&self, executor: E, product_id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }

    // Todos os produtos de um vendedor, mais recentes primeiro.
    pub async fn list_by_seller<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        only_approved: bool,
    ) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = if only_approved {
            "SELECT * FROM products WHERE seller_id = $1 AND approval_status = 'approved' \
             ORDER BY created_at DESC"
        } else {
            "SELECT * FROM products WHERE seller_id = $1 ORDER BY created_at DESC"
        };
        let products = sqlx::query_as::<_, Product>(sql)
            .bind(seller_id)
            .fetch_all(executor)
            .await?;
        Ok(products)
    }

    pub async fn list_by_seller_with_seller<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
    ) -> Result<Vec<ProductSellerRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("{PRODUCT_WITH_SELLER} WHERE p.seller_id = $1 ORDER BY p.created_at DESC");
        let rows = sqlx::query_as::<_, ProductSellerRow>(&sql)
            .bind(seller_id)
            .fetch_all(executor)
            .await?;
        Ok(rows)
    }

    // Vitrine pública: apenas aprovados, com filtros opcionais de tag
    // (minúscula, pertencimento) e de loja (igualdade sem caixa).
    pub async fn list_public<'e, E>(
        &self,
        executor: E,
        tag: Option<&str>,
        store: Option<&str>,
    ) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tag = tag.map(|t| t.to_lowercase());
        let products = sqlx::query_as::<_, Product>(
            "SELECT p.* FROM products p \
             JOIN sellers s ON s.id = p.seller_id \
             WHERE p.approval_status = 'approved' \
               AND ($1::TEXT IS NULL OR $1 = ANY(p.tags)) \
               AND ($2::TEXT IS NULL OR LOWER(s.store_name) = LOWER($2)) \
             ORDER BY p.created_at DESC",
        )
        .bind(tag)
        .bind(store)
        .fetch_all(executor)
        .await?;
        Ok(products)
    }

    pub async fn find_public_by_id<'e, E>(
        &self,
        executor: E,
        product_id: Uuid,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE id = $1 AND approval_status = 'approved'",
        )
        .bind(product_id)
        .fetch_optional(executor)
        .await?;
        Ok(product)
    }

    // ---
    // Escritas
    // ---

    // Novo produto entra sempre como 'pending'.
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        draft: &SubmitProductPayload,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products \
               (seller_id, name, description, price, original_price, discount_percentage, \
                images, category, subcategory, tags, in_stock, rating, approval_status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 'pending') \
             RETURNING *",
        )
        .bind(seller_id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(draft.original_price)
        .bind(draft.discount_percentage)
        .bind(&draft.images)
        .bind(&draft.category)
        .bind(&draft.subcategory)
        .bind(&draft.tags)
        .bind(draft.in_stock)
        .bind(draft.rating)
        .fetch_one(executor)
        .await?;
        Ok(product)
    }

    // Aplica o novo status, incrementando a versão. Quando o chamador manda
    // a versão que leu ($3), escritas obsoletas não casam e retornam None.
    pub async fn set_approval_status<'e, E>(
        &self,
        executor: E,
        product_id: Uuid,
        status: ApprovalStatus,
        admin_notes: Option<&str>,
        expected_version: Option<i32>,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = match status {
            ApprovalStatus::Rejected => {
                sqlx::query_as::<_, Product>(
                    "UPDATE products \
                     SET approval_status = $2, admin_notes = $3, \
                         version = version + 1, updated_at = now() \
                     WHERE id = $1 AND ($4::INT IS NULL OR version = $4) \
                     RETURNING *",
                )
                .bind(product_id)
                .bind(status)
                .bind(admin_notes)
                .bind(expected_version)
                .fetch_optional(executor)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Product>(
                    "UPDATE products \
                     SET approval_status = $2, version = version + 1, updated_at = now() \
                     WHERE id = $1 AND ($3::INT IS NULL OR version = $3) \
                     RETURNING *",
                )
                .bind(product_id)
                .bind(status)
                .bind(expected_version)
                .fetch_optional(executor)
                .await?
            }
        };
        Ok(product)
    }

    pub async fn delete<'e, E>(&self, executor: E, product_id: Uuid) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
