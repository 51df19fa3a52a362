// src/handlers/products.rs

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
    middleware::auth::{AuthAdmin, AuthSeller},
    models::product::{
        ApprovalStatus, ApproveProductPayload, Product, ProductWithSeller, RejectProductPayload,
        SubmitProductPayload,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListQuery {
    // Ausente equivale a 'pending' (inclui registros legados sem status).
    pub status: Option<ApprovalStatus>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StorefrontQuery {
    pub tag: Option<String>,
    pub store: Option<String>,
}

// ---
// Moderação (admin)
// ---

#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Produtos com o vendedor populado", body = Vec<ProductWithSeller>),
        (status = 401, description = "Token inválido"),
        (status = 403, description = "Não é admin")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductWithSeller>>, AppError> {
    let products = app_state.approval_service.list_products(query.status).await?;
    Ok(Json(products))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}/approve",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    request_body = ApproveProductPayload,
    responses(
        (status = 200, description = "Produto aprovado e vendedor notificado", body = ProductWithSeller),
        (status = 404, description = "Produto não encontrado"),
        (status = 409, description = "Versão enviada está obsoleta")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn approve_product(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
    payload: Option<Json<ApproveProductPayload>>,
) -> Result<Json<ProductWithSeller>, AppError> {
    let Json(payload) = payload.unwrap_or_default();
    let product = app_state
        .approval_service
        .approve(id, payload.expected_version)
        .await?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}/reject",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    request_body = RejectProductPayload,
    responses(
        (status = 200, description = "Produto rejeitado e vendedor notificado", body = ProductWithSeller),
        (status = 404, description = "Produto não encontrado"),
        (status = 409, description = "Versão enviada está obsoleta")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn reject_product(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
    payload: Option<Json<RejectProductPayload>>,
) -> Result<Json<ProductWithSeller>, AppError> {
    let Json(payload) = payload.unwrap_or_default();
    let product = app_state
        .approval_service
        .reject(id, payload.admin_notes.as_deref(), payload.expected_version)
        .await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido, sem notificação"),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    AuthAdmin(_admin): AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.approval_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Painel do vendedor
// ---

#[utoipa::path(
    post,
    path = "/api/seller/products",
    tag = "Products",
    request_body = SubmitProductPayload,
    responses(
        (status = 201, description = "Produto submetido como pendente", body = Product),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Conta bloqueada")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn submit_product(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
    Json(payload): Json<SubmitProductPayload>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    payload.validate()?;

    let product = app_state.approval_service.submit(&seller, &payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/seller/products",
    tag = "Products",
    responses(
        (status = 200, description = "Todos os produtos do vendedor, mais recentes primeiro", body = Vec<Product>)
    ),
    security(("bearer_jwt" = []))
)]
pub async fn my_products(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = app_state.approval_service.list_mine(seller.id, false).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/seller/products/approved",
    tag = "Products",
    responses(
        (status = 200, description = "Somente os produtos aprovados do vendedor", body = Vec<Product>)
    ),
    security(("bearer_jwt" = []))
)]
pub async fn my_approved_products(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = app_state.approval_service.list_mine(seller.id, true).await?;
    Ok(Json(products))
}

// ---
// Vitrine pública
// ---

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(StorefrontQuery),
    responses(
        (status = 200, description = "Produtos aprovados, com filtros opcionais de tag e loja", body = Vec<Product>)
    )
)]
pub async fn list_storefront(
    State(app_state): State<AppState>,
    Query(query): Query<StorefrontQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = app_state
        .approval_service
        .list_public(query.tag.as_deref(), query.store.as_deref())
        .await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto aprovado", body = Product),
        (status = 404, description = "Inexistente ou não aprovado")
    )
)]
pub async fn get_storefront_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = app_state.approval_service.get_public(id).await?;
    Ok(Json(product))
}
