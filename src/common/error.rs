use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
// Cada variante mapeia para um status HTTP em `into_response`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Conta de vendedor bloqueada pelo admin
    #[error("Conta bloqueada")]
    AccountBlocked,

    // O principal autenticado não pode executar a ação (papel errado
    // ou recurso pertencente a outro destinatário)
    #[error("Acesso negado")]
    Forbidden,

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    // Escrita com versão obsoleta (controle de concorrência otimista)
    #[error("Conflito de versão")]
    StaleVersion,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "This e-mail is already in use.".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Not authorized - invalid or missing token".to_string(),
            ),
            AppError::AccountBlocked => (
                StatusCode::FORBIDDEN,
                "Your account has been blocked. Please contact support.".to_string(),
            ),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Not authorized".to_string()),
            AppError::NotFound(entity) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::StaleVersion => (
                StatusCode::CONFLICT,
                "The record was modified by someone else. Reload and try again.".to_string(),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O detalhe fica só no log; o cliente recebe uma mensagem genérica.
            ref e => {
                tracing::error!("Erro interno do servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = AppError::NotFound("Product").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn forbidden_and_blocked_map_to_403() {
        assert_eq!(AppError::Forbidden.into_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::AccountBlocked.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn stale_version_maps_to_409() {
        let resp = AppError::StaleVersion.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_token_maps_to_401() {
        let resp = AppError::InvalidToken.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
