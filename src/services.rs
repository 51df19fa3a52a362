// src/services.rs

pub mod approval_service;
pub mod auth;
pub mod contact_service;
pub mod notification_service;
pub mod seller_service;
pub mod stats_service;

pub use approval_service::ApprovalService;
pub use auth::AuthService;
pub use contact_service::ContactService;
pub use notification_service::NotificationService;
pub use seller_service::SellerService;
pub use stats_service::StatsService;
