// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthAdmin, AuthSeller},
    models::{
        auth::{Admin, AuthResponse, LoginPayload},
        seller::{RegisterSellerPayload, Seller, UpdateSellerProfilePayload},
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterSellerResponse {
    pub token: String,
    pub seller: Seller,
}

#[utoipa::path(
    post,
    path = "/api/sellers/register",
    tag = "Auth",
    request_body = RegisterSellerPayload,
    responses(
        (status = 201, description = "Vendedor registrado", body = RegisterSellerResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn register_seller(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterSellerPayload>,
) -> Result<(StatusCode, Json<RegisterSellerResponse>), AppError> {
    payload.validate()?;

    let (seller, token) = app_state.auth_service.register_seller(&payload).await?;
    Ok((StatusCode::CREATED, Json(RegisterSellerResponse { token, seller })))
}

#[utoipa::path(
    post,
    path = "/api/sellers/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login efetuado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas"),
        (status = 403, description = "Conta bloqueada")
    )
)]
pub async fn login_seller(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .login_seller(&payload.email, &payload.password)
        .await?;
    Ok(Json(AuthResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login efetuado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login_admin(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .login_admin(&payload.email, &payload.password)
        .await?;
    Ok(Json(AuthResponse { token }))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login efetuado", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login_user(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .login_user(&payload.email, &payload.password)
        .await?;
    Ok(Json(AuthResponse { token }))
}

// Checagem de token do painel admin: se o guard passou, o token vale.
#[utoipa::path(
    get,
    path = "/api/admin/verify",
    tag = "Auth",
    responses(
        (status = 200, description = "Token válido", body = Admin),
        (status = 401, description = "Token inválido")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn verify_admin(AuthAdmin(admin): AuthAdmin) -> Json<Admin> {
    Json(admin)
}

#[utoipa::path(
    get,
    path = "/api/sellers/profile",
    tag = "Auth",
    responses(
        (status = 200, description = "Perfil do vendedor autenticado", body = Seller),
        (status = 401, description = "Token inválido"),
        (status = 403, description = "Conta bloqueada")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn get_profile(AuthSeller(seller): AuthSeller) -> Json<Seller> {
    Json(seller)
}

#[utoipa::path(
    put,
    path = "/api/sellers/profile",
    tag = "Auth",
    request_body = UpdateSellerProfilePayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = Seller),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Token inválido")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
    Json(payload): Json<UpdateSellerProfilePayload>,
) -> Result<Json<Seller>, AppError> {
    payload.validate()?;

    let updated = app_state
        .seller_service
        .update_profile(seller.id, &payload)
        .await?;
    Ok(Json(updated))
}
