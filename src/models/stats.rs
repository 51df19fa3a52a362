// src/models/stats.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::order::OrderItemStatus;

// ---
// Overview do dashboard
// ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_orders: i64,
    pub total_revenue: Decimal,
    pub total_products: i64,
    pub total_customers: i64,
    pub top_products: Vec<TopProduct>,
    pub time_filter: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub sold: i64,
}

// ---
// Gráfico de vendas (receita por dia)
// ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub date: String,
    pub total_sales: Decimal,
}

// ---
// Distribuição de status dos pedidos (sempre as 5 chaves, zeradas se preciso)
// ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: OrderItemStatus,
    pub count: i64,
}

// ---
// Receita por (categoria, subcategoria)
// ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub subcategory: Option<String>,
    pub revenue: Decimal,
    pub units_sold: i64,
}

// ---
// Métricas básicas de inventário
// ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMetrics {
    pub total_stock_count: i64,
    pub total_stock_value: Decimal,
    pub out_of_stock: Vec<OutOfStockProduct>,
    pub top_selling: Option<ProductSales>,
    pub lowest_selling: Option<ProductSales>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutOfStockProduct {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub id: Uuid,
    pub name: String,
    pub units_sold: i64,
    pub category: String,
    pub subcategory: Option<String>,
}

// ---
// Gestão de inventário (relatório completo do painel)
// ---

// Classificação do nível de estoque de um produto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    // Zero é esgotado; até 10 unidades é estoque baixo.
    pub fn classify(in_stock: i32) -> Self {
        if in_stock == 0 {
            StockStatus::OutOfStock
        } else if in_stock <= 10 {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    // Ordem de exibição do painel: esgotado primeiro, depois baixo, depois ok.
    pub fn sort_rank(&self) -> u8 {
        match self {
            StockStatus::OutOfStock => 0,
            StockStatus::LowStock => 1,
            StockStatus::InStock => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryProduct {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub stock: i32,
    pub price: Decimal,
    pub status: StockStatus,
    pub image: Option<String>,
    pub total_sold: i64,
    pub revenue: Decimal,
    pub created_at: DateTime<Utc>,
}

// Os quatro "cards" de alerta do topo do painel. Campos opcionais só
// aparecem no card a que pertencem.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertCard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    pub count: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_low_stock: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_out_of_stock: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_stock_value: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryManagement {
    pub alert_cards: Vec<AlertCard>,
    pub products: Vec<InventoryProduct>,
    pub summary: InventorySummary,
}

// ---
// Análises do painel admin
// ---

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlySales {
    pub name: String,
    pub sales: Decimal,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

// Usuários ativos por dia da semana ("Sun".."Sat") do último login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeekdayActiveUsers {
    pub name: String,
    pub users: i64,
}

// Envelope padrão dos endpoints de estatísticas, como os painéis consomem.
#[derive(Debug, Serialize)]
pub struct StatsEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> StatsEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_classification_boundaries() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(10), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(11), StockStatus::InStock);
        assert_eq!(StockStatus::classify(50), StockStatus::InStock);
    }

    #[test]
    fn sort_rank_puts_out_of_stock_first() {
        assert!(StockStatus::OutOfStock.sort_rank() < StockStatus::LowStock.sort_rank());
        assert!(StockStatus::LowStock.sort_rank() < StockStatus::InStock.sort_rank());
    }

    #[test]
    fn stock_status_serializes_with_spaces() {
        assert_eq!(serde_json::to_string(&StockStatus::OutOfStock).unwrap(), "\"Out of Stock\"");
        assert_eq!(serde_json::to_string(&StockStatus::LowStock).unwrap(), "\"Low Stock\"");
        assert_eq!(serde_json::to_string(&StockStatus::InStock).unwrap(), "\"In Stock\"");
    }

    #[test]
    fn alert_card_omits_absent_fields() {
        let card = AlertCard {
            title: "Total Stock Value".into(),
            product: None,
            count: "$100.00".into(),
            kind: "value".into(),
            product_id: None,
            total_low_stock: None,
            total_out_of_stock: None,
        };
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("product").is_none());
        assert_eq!(json["type"], "value");
    }
}
