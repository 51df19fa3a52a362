// src/models/seller.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Status de verificação do cadastro do vendedor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "verification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

// A linha completa de `sellers`. Hash de senha e dados bancários nunca
// saem serializados; leituras administrativas usam a projeção `SellerOverview`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: Uuid,
    pub seller_name: String,
    pub store_name: String,
    pub email: String,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: String,

    pub phone: String,
    pub bio: Option<String>,

    pub business_type: String,
    pub gst_number: Option<String>,
    pub registration_number: Option<String>,
    pub business_street: Option<String>,
    pub business_city: Option<String>,
    pub business_state: Option<String>,
    pub business_country: Option<String>,
    pub business_postal_code: Option<String>,

    // Dados bancários ficam fora de qualquer resposta JSON
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub bank_account_number: Option<String>,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub bank_ifsc_code: Option<String>,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub bank_account_holder: Option<String>,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub bank_upi_id: Option<String>,

    pub verification_status: VerificationStatus,
    pub is_blocked: bool,

    // Contadores informativos; os números autoritativos vêm do agregador
    pub total_products: i32,
    pub total_orders: i32,
    pub ratings: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Projeção não sensível usada pelo painel admin (lista e detalhe).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerOverview {
    pub id: Uuid,
    pub seller_name: String,
    pub store_name: String,
    pub email: String,
    pub phone: String,
    pub bio: Option<String>,
    pub business_type: String,
    pub verification_status: VerificationStatus,
    pub is_blocked: bool,
    pub total_products: i32,
    pub total_orders: i32,
    pub ratings: Decimal,
    pub created_at: DateTime<Utc>,
}

// Projeção mínima anexada a produtos (uma única definição, aplicada
// uniformemente por todas as consultas que "populam" o vendedor).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SellerPublic {
    pub id: Uuid,
    pub seller_name: String,
    pub store_name: String,
    pub email: String,
    pub phone: String,
}

// Dados para registro de um novo vendedor
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSellerPayload {
    #[validate(length(min = 1, message = "The seller name is required."))]
    pub seller_name: String,

    #[validate(length(min = 1, message = "The store name is required."))]
    pub store_name: String,

    #[validate(email(message = "The e-mail address is invalid."))]
    pub email: String,

    #[validate(length(min = 6, message = "The password must be at least 6 characters."))]
    pub password: String,

    #[validate(length(min = 1, message = "The phone number is required."))]
    pub phone: String,

    pub bio: Option<String>,
}

// Atualização de perfil feita pelo próprio vendedor
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSellerProfilePayload {
    #[validate(length(min = 1, message = "The seller name cannot be empty."))]
    pub seller_name: Option<String>,
    #[validate(length(min = 1, message = "The store name cannot be empty."))]
    pub store_name: Option<String>,
    #[validate(length(min = 1, message = "The phone number cannot be empty."))]
    pub phone: Option<String>,
    pub bio: Option<String>,
}

// Bloqueio/desbloqueio pelo admin
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockSellerPayload {
    pub is_blocked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_never_serializes_credentials_or_banking() {
        let seller = Seller {
            id: Uuid::new_v4(),
            seller_name: "Ana".into(),
            store_name: "Loja da Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "$2b$12$secret".into(),
            phone: "555-0100".into(),
            bio: None,
            business_type: "individual".into(),
            gst_number: None,
            registration_number: None,
            business_street: None,
            business_city: None,
            business_state: None,
            business_country: None,
            business_postal_code: None,
            bank_account_number: Some("0001234".into()),
            bank_ifsc_code: Some("IFSC01".into()),
            bank_account_holder: Some("Ana".into()),
            bank_upi_id: None,
            verification_status: VerificationStatus::Pending,
            is_blocked: false,
            total_products: 0,
            total_orders: 0,
            ratings: Decimal::ZERO,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&seller).unwrap();
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains("secret"));
        assert!(!json.contains("bankAccountNumber"));
        assert!(!json.contains("0001234"));
    }

    #[test]
    fn verification_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&VerificationStatus::Verified).unwrap(),
            "\"verified\""
        );
    }
}
