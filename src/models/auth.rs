// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::notification::RecipientModel;
use crate::models::seller::Seller;

// Papel carregado dentro do JWT. O papel decide em qual tabela o `sub`
// é resolvido na validação do token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    User,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // ID do principal
    pub role: Role, // Em qual coleção o sub resolve
    pub exp: usize,
    pub iat: usize,
}

// Administrador da plataforma
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

// Comprador da loja (storefront)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: String,

    // Alimenta a análise de usuários ativos do painel admin.
    pub last_login: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

// O principal autenticado, resolvido UMA vez pela camada de auth e passado
// explicitamente pela cadeia de chamadas (nunca re-derivado de strings soltas).
#[derive(Debug, Clone)]
pub enum Principal {
    Admin(Admin),
    Seller(Box<Seller>),
    User(User),
}

impl Principal {
    // O par (destinatário, tipo) usado pela caixa de notificações.
    pub fn recipient(&self) -> (Uuid, RecipientModel) {
        match self {
            Principal::Admin(a) => (a.id, RecipientModel::Admin),
            Principal::Seller(s) => (s.id, RecipientModel::Seller),
            Principal::User(u) => (u.id, RecipientModel::User),
        }
    }
}

// Dados para login (admin, vendedor ou usuário)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "The e-mail address is invalid."))]
    pub email: String,
    #[validate(length(min = 6, message = "The password must be at least 6 characters."))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[test]
    fn login_payload_rejects_short_password() {
        use validator::Validate;
        let payload = LoginPayload {
            email: "seller@example.com".into(),
            password: "123".into(),
        };
        assert!(payload.validate().is_err());
    }
}
