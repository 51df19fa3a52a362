// src/db/stats_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        order::OrderItemStatus,
        stats::{CategoryCount, CategorySales, SalesPoint, TopProduct},
    },
};

// Linhas intermediárias das agregações; o serviço monta os relatórios
// finais a partir delas.

#[derive(Debug, FromRow)]
pub struct OverviewRow {
    pub total_orders: i64,
    pub total_revenue: Decimal,
    pub total_customers: i64,
}

#[derive(Debug, FromRow)]
pub struct StatusCountRow {
    pub status: OrderItemStatus,
    pub count: i64,
}

#[derive(Debug, FromRow)]
pub struct ProductSalesRow {
    pub id: Uuid,
    pub name: String,
    pub units_sold: i64,
    pub category: String,
    pub subcategory: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct InventoryRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub in_stock: i32,
    pub price: Decimal,
    pub image: Option<String>,
    pub total_sold: i64,
    pub revenue: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct MonthlySalesRow {
    pub month: i32,
    pub sales: Decimal,
}

#[derive(Debug, FromRow)]
pub struct WeekdayCountRow {
    pub weekday: i32,
    pub users: i64,
}

// Só itens de produtos aprovados entram nas estatísticas do vendedor.
const SOLD_ITEMS: &str = "FROM order_items oi \
  JOIN orders o ON o.id = oi.order_id \
  JOIN products p ON p.id = oi.product_id \
 WHERE oi.seller_id = $1 \
   AND p.approval_status = 'approved' \
   AND o.created_at >= $2 AND o.created_at < $3";

// totalOrders conta LINHAS de pedido do vendedor, não pedidos distintos;
// um pedido com três itens dele vale três.
fn overview_sql() -> String {
    format!(
        "SELECT COUNT(*) AS total_orders, \
                COALESCE(SUM(oi.unit_price * oi.quantity), 0) AS total_revenue, \
                COUNT(DISTINCT o.user_id) AS total_customers \
         {SOLD_ITEMS}"
    )
}

#[derive(Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn overview<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<OverviewRow, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, OverviewRow>(&overview_sql())
            .bind(seller_id)
            .bind(from)
            .bind(to)
            .fetch_one(executor)
            .await?;
        Ok(row)
    }

    pub async fn count_approved_products<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
    ) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products \
             WHERE seller_id = $1 AND approval_status = 'approved'",
        )
        .bind(seller_id)
        .fetch_one(executor)
        .await?;
        Ok(count)
    }

    pub async fn top_products<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<TopProduct>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT p.id, p.name, p.images[1] AS image, \
                    SUM(oi.quantity)::BIGINT AS sold \
             {SOLD_ITEMS} \
             GROUP BY p.id, p.name, p.images \
             ORDER BY sold DESC \
             LIMIT $4"
        );
        let rows = sqlx::query_as::<_, TopProduct>(&sql)
            .bind(seller_id)
            .bind(from)
            .bind(to)
            .bind(limit)
            .fetch_all(executor)
            .await?;
        Ok(rows)
    }

    pub async fn sales_by_day<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<SalesPoint>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT to_char(o.created_at, 'YYYY-MM-DD') AS date, \
                    COALESCE(SUM(oi.unit_price * oi.quantity), 0) AS total_sales \
             {SOLD_ITEMS} \
             GROUP BY date \
             ORDER BY date"
        );
        let rows = sqlx::query_as::<_, SalesPoint>(&sql)
            .bind(seller_id)
            .bind(from)
            .bind(to)
            .fetch_all(executor)
            .await?;
        Ok(rows)
    }

    // Só os status presentes no período; o serviço completa os ausentes
    // com zero.
    pub async fn status_counts<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatusCountRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT oi.status, COUNT(*) AS count \
             {SOLD_ITEMS} \
             GROUP BY oi.status"
        );
        let rows = sqlx::query_as::<_, StatusCountRow>(&sql)
            .bind(seller_id)
            .bind(from)
            .bind(to)
            .fetch_all(executor)
            .await?;
        Ok(rows)
    }

    pub async fn category_sales<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CategorySales>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT p.category, p.subcategory, \
                    COALESCE(SUM(oi.unit_price * oi.quantity), 0) AS revenue, \
                    SUM(oi.quantity)::BIGINT AS units_sold \
             {SOLD_ITEMS} \
             GROUP BY p.category, p.subcategory \
             ORDER BY revenue DESC"
        );
        let rows = sqlx::query_as::<_, CategorySales>(&sql)
            .bind(seller_id)
            .bind(from)
            .bind(to)
            .fetch_all(executor)
            .await?;
        Ok(rows)
    }

    // Unidades vendidas por produto no período, do mais ao menos vendido.
    pub async fn product_sales<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ProductSalesRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT p.id, p.name, SUM(oi.quantity)::BIGINT AS units_sold, \
                    p.category, p.subcategory \
             {SOLD_ITEMS} \
             GROUP BY p.id, p.name, p.category, p.subcategory \
             ORDER BY units_sold DESC"
        );
        let rows = sqlx::query_as::<_, ProductSalesRow>(&sql)
            .bind(seller_id)
            .bind(from)
            .bind(to)
            .fetch_all(executor)
            .await?;
        Ok(rows)
    }

    // Catálogo aprovado do vendedor com vendas e receita acumuladas,
    // base do relatório de gestão de inventário.
    pub async fn inventory_rows<'e, E>(
        &self,
        executor: E,
        seller_id: Uuid,
    ) -> Result<Vec<InventoryRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, InventoryRow>(
            "SELECT p.id, p.name, p.category, p.subcategory, p.in_stock, p.price, \
                    p.images[1] AS image, \
                    COALESCE(SUM(oi.quantity), 0)::BIGINT AS total_sold, \
                    COALESCE(SUM(oi.unit_price * oi.quantity), 0) AS revenue, \
                    p.created_at \
             FROM products p \
             LEFT JOIN order_items oi ON oi.product_id = p.id \
             WHERE p.seller_id = $1 AND p.approval_status = 'approved' \
             GROUP BY p.id \
             ORDER BY p.created_at DESC",
        )
        .bind(seller_id)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    // ---
    // Agregações da plataforma (painel admin)
    // ---

    // Receita da plataforma por mês do ano corrente; meses sem venda
    // não aparecem e o serviço zera.
    pub async fn monthly_sales<'e, E>(
        &self,
        executor: E,
        year: i32,
    ) -> Result<Vec<MonthlySalesRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, MonthlySalesRow>(
            "SELECT EXTRACT(MONTH FROM o.created_at)::INT AS month, \
                    COALESCE(SUM(oi.unit_price * oi.quantity), 0) AS sales \
             FROM order_items oi \
             JOIN orders o ON o.id = oi.order_id \
             WHERE EXTRACT(YEAR FROM o.created_at)::INT = $1 \
             GROUP BY month \
             ORDER BY month",
        )
        .bind(year)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    pub async fn category_counts<'e, E>(&self, executor: E) -> Result<Vec<CategoryCount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, CategoryCount>(
            "SELECT category, COUNT(*) AS count \
             FROM products \
             WHERE approval_status = 'approved' \
             GROUP BY category \
             ORDER BY count DESC",
        )
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    // Usuários ativos por dia da semana do último login, a partir de `since`.
    // EXTRACT(DOW): 0 = domingo .. 6 = sábado.
    pub async fn active_users_by_weekday<'e, E>(
        &self,
        executor: E,
        since: DateTime<Utc>,
    ) -> Result<Vec<WeekdayCountRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, WeekdayCountRow>(
            "SELECT EXTRACT(DOW FROM last_login)::INT AS weekday, \
                    COUNT(*) AS users \
             FROM users \
             WHERE last_login >= $1 \
             GROUP BY weekday \
             ORDER BY weekday",
        )
        .bind(since)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_counts_order_lines_not_distinct_orders() {
        let sql = overview_sql();
        assert!(sql.contains("COUNT(*) AS total_orders"));
        assert!(!sql.contains("COUNT(DISTINCT o.id)"));
    }
}
