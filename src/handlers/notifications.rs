// src/handlers/notifications.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthPrincipal,
    models::notification::Notification,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadAllResponse {
    pub updated: u64,
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notifications",
    responses(
        (status = 200, description = "Notificações do principal, mais recentes primeiro", body = Vec<Notification>),
        (status = 401, description = "Token inválido")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn list_notifications(
    State(app_state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = app_state.notification_service.list_for(&principal).await?;
    Ok(Json(notifications))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = "Notifications",
    params(("id" = Uuid, Path, description = "ID da notificação")),
    responses(
        (status = 200, description = "Notificação marcada como lida", body = Notification),
        (status = 403, description = "Notificação de outro destinatário"),
        (status = 404, description = "Notificação não encontrada")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn mark_read(
    State(app_state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
    Path(id): Path<Uuid>,
) -> Result<Json<Notification>, AppError> {
    let notification = app_state
        .notification_service
        .mark_read(id, &principal)
        .await?;
    Ok(Json(notification))
}

#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = "Notifications",
    responses(
        (status = 200, description = "Não lidas do principal marcadas como lidas", body = ReadAllResponse)
    ),
    security(("bearer_jwt" = []))
)]
pub async fn mark_all_read(
    State(app_state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
) -> Result<Json<ReadAllResponse>, AppError> {
    let updated = app_state
        .notification_service
        .mark_all_read(&principal)
        .await?;
    Ok(Json(ReadAllResponse { updated }))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = "Notifications",
    params(("id" = Uuid, Path, description = "ID da notificação")),
    responses(
        (status = 204, description = "Notificação removida"),
        (status = 403, description = "Notificação de outro destinatário"),
        (status = 404, description = "Notificação não encontrada")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn delete_notification(
    State(app_state): State<AppState>,
    AuthPrincipal(principal): AuthPrincipal,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.notification_service.remove(id, &principal).await?;
    Ok(StatusCode::NO_CONTENT)
}
