// src/db.rs

pub mod admin_repo;
pub mod contact_repo;
pub mod notification_repo;
pub mod product_repo;
pub mod seller_repo;
pub mod stats_repo;
pub mod user_repo;

pub use admin_repo::AdminRepository;
pub use contact_repo::ContactRepository;
pub use notification_repo::NotificationRepository;
pub use product_repo::ProductRepository;
pub use seller_repo::SellerRepository;
pub use stats_repo::StatsRepository;
pub use user_repo::UserRepository;
