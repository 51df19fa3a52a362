// src/handlers/contact.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthAdmin,
    models::contact::{ContactMessage, CreateContactPayload, RespondContactPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ContactListQuery {
    // Filtra pelo e-mail do remetente quando presente.
    pub email: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Mensagem registrada como Pending", body = ContactMessage),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_message(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateContactPayload>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    payload.validate()?;

    let message = app_state.contact_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "Contact",
    params(ContactListQuery),
    responses(
        (status = 200, description = "Mensagens, mais recentes primeiro", body = Vec<ContactMessage>),
        (status = 401, description = "Token inválido"),
        (status = 403, description = "Não é admin")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn list_messages(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Query(query): Query<ContactListQuery>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let messages = app_state.contact_service.list(query.email.as_deref()).await?;
    Ok(Json(messages))
}

#[utoipa::path(
    put,
    path = "/api/contact/{id}",
    tag = "Contact",
    params(("id" = Uuid, Path, description = "ID da mensagem")),
    request_body = RespondContactPayload,
    responses(
        (status = 200, description = "Resposta e status gravados", body = ContactMessage),
        (status = 404, description = "Mensagem não encontrada")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn respond_message(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<RespondContactPayload>,
) -> Result<Json<ContactMessage>, AppError> {
    let message = app_state.contact_service.respond(id, &payload).await?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "Contact",
    params(("id" = Uuid, Path, description = "ID da mensagem")),
    responses(
        (status = 204, description = "Mensagem removida"),
        (status = 404, description = "Mensagem não encontrada")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn delete_message(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.contact_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
