// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthAdmin,
    models::{
        product::ProductWithSeller,
        seller::{BlockSellerPayload, SellerOverview},
        stats::StatsEnvelope,
    },
};

// ---
// Gestão de vendedores
// ---

#[utoipa::path(
    get,
    path = "/api/admin/sellers",
    tag = "Admin",
    responses(
        (status = 200, description = "Todos os vendedores, sem campos sensíveis", body = Vec<SellerOverview>),
        (status = 401, description = "Token inválido"),
        (status = 403, description = "Não é admin")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn list_sellers(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
) -> Result<Json<Vec<SellerOverview>>, AppError> {
    let sellers = app_state.seller_service.list().await?;
    Ok(Json(sellers))
}

#[utoipa::path(
    get,
    path = "/api/admin/sellers/{id}",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do vendedor")),
    responses(
        (status = 200, description = "Detalhe do vendedor", body = SellerOverview),
        (status = 404, description = "Vendedor não encontrado")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn get_seller(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<SellerOverview>, AppError> {
    let seller = app_state.seller_service.get(id).await?;
    Ok(Json(seller))
}

#[utoipa::path(
    put,
    path = "/api/admin/sellers/{id}/block",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do vendedor")),
    request_body = BlockSellerPayload,
    responses(
        (status = 200, description = "Flag de bloqueio atualizada", body = SellerOverview),
        (status = 404, description = "Vendedor não encontrado")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn block_seller(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlockSellerPayload>,
) -> Result<Json<SellerOverview>, AppError> {
    let seller = app_state
        .seller_service
        .set_blocked(id, payload.is_blocked)
        .await?;
    Ok(Json(seller))
}

#[utoipa::path(
    delete,
    path = "/api/admin/sellers/{id}",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do vendedor")),
    responses(
        (status = 204, description = "Vendedor removido"),
        (status = 404, description = "Vendedor não encontrado")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn delete_seller(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.seller_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/sellers/{id}/products",
    tag = "Admin",
    params(("id" = Uuid, Path, description = "ID do vendedor")),
    responses(
        (status = 200, description = "Produtos do vendedor, qualquer status", body = Vec<ProductWithSeller>)
    ),
    security(("bearer_jwt" = []))
)]
pub async fn seller_products(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ProductWithSeller>>, AppError> {
    let products = app_state.approval_service.list_by_seller(id).await?;
    Ok(Json(products))
}

// ---
// Análises da plataforma
// ---

#[utoipa::path(
    get,
    path = "/api/admin/analytics/sales",
    tag = "Admin",
    responses(
        (status = 200, description = "Receita por mês do ano corrente, Jan..Dec zerados quando sem venda")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn analytics_sales(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let year = Utc::now().year();
    let sales = app_state.stats_service.monthly_sales(year).await?;
    Ok(Json(StatsEnvelope::new(sales)))
}

#[utoipa::path(
    get,
    path = "/api/admin/analytics/users",
    tag = "Admin",
    responses(
        (status = 200, description = "Usuários ativos nos últimos 7 dias, por dia da semana do último login")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn analytics_users(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let users = app_state.stats_service.weekly_active_users().await?;
    Ok(Json(StatsEnvelope::new(users)))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats/category-stats",
    tag = "Admin",
    responses(
        (status = 200, description = "Contagem de produtos aprovados por categoria, decrescente")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn category_stats(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let counts = app_state.stats_service.category_counts().await?;
    Ok(Json(StatsEnvelope::new(counts)))
}
