// src/handlers.rs

pub mod admin;
pub mod auth;
pub mod contact;
pub mod notifications;
pub mod products;
pub mod stats;
