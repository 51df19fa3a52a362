// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "contact_status")]
pub enum ContactStatus {
    #[sqlx(rename = "Pending")]
    Pending,
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sqlx(rename = "Resolved")]
    Resolved,
}

// Mensagem de contato/suporte, de visitantes ou de vendedores logados.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_from_seller: bool,
    pub seller_id: Option<Uuid>,
    pub status: ContactStatus,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    #[validate(length(min = 1, message = "The name is required."))]
    pub name: String,

    #[validate(email(message = "The e-mail address is invalid."))]
    pub email: String,

    #[validate(length(min = 1, message = "The subject is required."))]
    pub subject: String,

    #[validate(length(min = 1, message = "The message is required."))]
    pub message: String,

    #[serde(default)]
    pub is_from_seller: bool,
    pub seller_id: Option<Uuid>,
}

// Resposta do admin: texto + novo status.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RespondContactPayload {
    #[serde(default)]
    pub response: String,
    pub status: ContactStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&ContactStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let parsed: ContactStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, ContactStatus::InProgress);
    }

    #[test]
    fn create_payload_defaults_is_from_seller_to_false() {
        let payload: CreateContactPayload = serde_json::from_str(
            r#"{"name":"Guest","email":"g@example.com","subject":"Hi","message":"Hello"}"#,
        )
        .unwrap();
        assert!(!payload.is_from_seller);
        assert!(payload.seller_id.is_none());
    }
}
