// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        AdminRepository, ContactRepository, NotificationRepository, ProductRepository,
        SellerRepository, StatsRepository, UserRepository,
    },
    services::{
        ApprovalService, AuthService, ContactService, NotificationService, SellerService,
        StatsService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub approval_service: ApprovalService,
    pub contact_service: ContactService,
    pub notification_service: NotificationService,
    pub seller_service: SellerService,
    pub stats_service: StatsService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("Conexão com o banco de dados estabelecida");

        // --- Monta o gráfico de dependências ---
        let admin_repo = AdminRepository::new(db_pool.clone());
        let seller_repo = SellerRepository::new(db_pool.clone());
        let user_repo = UserRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let contact_repo = ContactRepository::new(db_pool.clone());
        let notification_repo = NotificationRepository::new(db_pool.clone());
        let stats_repo = StatsRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            admin_repo,
            seller_repo.clone(),
            user_repo,
            jwt_secret,
        );
        let approval_service =
            ApprovalService::new(product_repo, notification_repo.clone());
        let contact_service =
            ContactService::new(contact_repo, seller_repo.clone(), notification_repo.clone());
        let notification_service = NotificationService::new(notification_repo);
        let seller_service = SellerService::new(seller_repo);
        let stats_service = StatsService::new(stats_repo);

        Ok(Self {
            db_pool,
            auth_service,
            approval_service,
            contact_service,
            notification_service,
            seller_service,
            stats_service,
        })
    }
}
