// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::seller::SellerPublic;

// Status de aprovação de um produto. A coluna é NULLABLE: registros legados
// sem o campo contam como 'pending' em todas as consultas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "approval_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub discount_percentage: Option<Decimal>,
    pub images: Vec<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub tags: Vec<String>,
    pub in_stock: i32,
    pub rating: i32,
    pub approval_status: Option<ApprovalStatus>,
    pub admin_notes: Option<String>,
    // Incrementada a cada mudança de status; clientes podem mandar a versão
    // lida de volta para detectar escritas concorrentes.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Linha produto + campos do vendedor, como sai da consulta com JOIN.
// Os campos do vendedor vêm com alias para não colidir com os do produto.
#[derive(Debug, FromRow)]
pub struct ProductSellerRow {
    #[sqlx(flatten)]
    pub product: Product,
    pub seller_name: String,
    pub store_name: String,
    pub seller_email: String,
    pub seller_phone: String,
}

// O formato que os painéis consomem: produto com o vendedor "populado".
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithSeller {
    #[serde(flatten)]
    pub product: Product,
    pub seller: SellerPublic,
}

impl From<ProductSellerRow> for ProductWithSeller {
    fn from(row: ProductSellerRow) -> Self {
        let seller = SellerPublic {
            id: row.product.seller_id,
            seller_name: row.seller_name,
            store_name: row.store_name,
            email: row.seller_email,
            phone: row.seller_phone,
        };
        ProductWithSeller { product: row.product, seller }
    }
}

// Rascunho enviado pelo vendedor. Upload de imagem fica fora do core:
// o painel manda as URLs já hospedadas.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProductPayload {
    #[validate(length(min = 1, message = "The product name is required."))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub discount_percentage: Option<Decimal>,

    #[validate(length(min = 1, message = "The category is required."))]
    pub category: String,
    pub subcategory: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub in_stock: i32,
    #[serde(default)]
    pub rating: i32,
}

// Corpo da rejeição: notas livres do admin, aceitas vazias ou ausentes.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectProductPayload {
    pub admin_notes: Option<String>,
    // Versão lida pelo painel; se vier e estiver obsoleta, a escrita
    // falha com 409 em vez de sobrescrever silenciosamente.
    pub expected_version: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApproveProductPayload {
    pub expected_version: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ApprovalStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&ApprovalStatus::Approved).unwrap(), "\"approved\"");
        assert_eq!(serde_json::to_string(&ApprovalStatus::Rejected).unwrap(), "\"rejected\"");
    }

    #[test]
    fn product_with_seller_flattens_product_fields() {
        let row = ProductSellerRow {
            product: Product {
                id: Uuid::new_v4(),
                seller_id: Uuid::new_v4(),
                name: "Caneca".into(),
                description: String::new(),
                price: Decimal::new(1999, 2),
                original_price: None,
                discount_percentage: None,
                images: vec![],
                category: "Home".into(),
                subcategory: None,
                tags: vec![],
                in_stock: 3,
                rating: 0,
                approval_status: Some(ApprovalStatus::Pending),
                admin_notes: None,
                version: 1,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            seller_name: "Ana".into(),
            store_name: "Loja da Ana".into(),
            seller_email: "ana@example.com".into(),
            seller_phone: "555-0100".into(),
        };

        let populated = ProductWithSeller::from(row);
        let json = serde_json::to_value(&populated).unwrap();
        assert_eq!(json["name"], "Caneca");
        assert_eq!(json["seller"]["storeName"], "Loja da Ana");
        // A projeção do vendedor não tem campos sensíveis
        assert!(json["seller"].get("passwordHash").is_none());
        assert!(json["seller"].get("bankAccountNumber").is_none());
    }
}
