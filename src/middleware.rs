// src/middleware.rs

pub mod auth;

pub use auth::{AuthAdmin, AuthPrincipal, AuthSeller};
