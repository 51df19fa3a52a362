// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        auth::{Admin, Principal},
        seller::Seller,
    },
};

// Valida o bearer token e resolve o principal no banco, uma vez por
// requisição. Os três extratores compartilham este caminho; os
// especializados só restringem o papel.
async fn resolve_principal<S>(parts: &mut Parts, state: &S) -> Result<Principal, AppError>
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidToken)?;

    let app_state = AppState::from_ref(state);
    app_state.auth_service.validate_token(bearer.token()).await
}

// Qualquer principal autenticado (admin, vendedor ou usuário).
pub struct AuthPrincipal(pub Principal);

impl<S> FromRequestParts<S> for AuthPrincipal
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(AuthPrincipal(resolve_principal(parts, state).await?))
    }
}

// Somente vendedores. Vendedor bloqueado nem chega aqui: a validação do
// token já devolve 403.
pub struct AuthSeller(pub Seller);

impl<S> FromRequestParts<S> for AuthSeller
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_principal(parts, state).await? {
            Principal::Seller(seller) => Ok(AuthSeller(*seller)),
            _ => Err(AppError::Forbidden),
        }
    }
}

// Somente admins.
pub struct AuthAdmin(pub Admin);

impl<S> FromRequestParts<S> for AuthAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match resolve_principal(parts, state).await? {
            Principal::Admin(admin) => Ok(AuthAdmin(admin)),
            _ => Err(AppError::Forbidden),
        }
    }
}
