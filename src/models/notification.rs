// src/models/notification.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Em qual coleção o campo `recipient` resolve. O tipo fechado torna
// destinatários inválidos irrepresentáveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "recipient_model")]
pub enum RecipientModel {
    #[sqlx(rename = "User")]
    User,
    #[sqlx(rename = "Seller")]
    Seller,
    #[sqlx(rename = "Admin")]
    Admin,
}

// Registro imutável (exceto a flag `read`) dirigido a um destinatário.
// Criado exclusivamente como efeito colateral de outros fluxos.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub recipient: Uuid,
    pub recipient_model: RecipientModel,
    pub message: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_model_round_trips_pascal_case() {
        assert_eq!(serde_json::to_string(&RecipientModel::Seller).unwrap(), "\"Seller\"");
        let parsed: RecipientModel = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(parsed, RecipientModel::Admin);
    }
}
