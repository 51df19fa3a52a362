//src/main.rs

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("Migrações do banco de dados executadas");

    // Semeia o primeiro admin a partir do ambiente, fora de qualquer rota.
    bootstrap_admin(&app_state).await;

    // Rotas públicas de autenticação
    let auth_routes = Router::new()
        .route("/api/sellers/register", post(handlers::auth::register_seller))
        .route("/api/sellers/login", post(handlers::auth::login_seller))
        .route("/api/admin/login", post(handlers::auth::login_admin))
        .route("/api/users/login", post(handlers::auth::login_user))
        .route("/api/admin/verify", get(handlers::auth::verify_admin))
        .route(
            "/api/sellers/profile",
            get(handlers::auth::get_profile).put(handlers::auth::update_profile),
        );

    // Painel admin: vendedores, moderação e análises
    let admin_routes = Router::new()
        .route("/api/admin/sellers", get(handlers::admin::list_sellers))
        .route(
            "/api/admin/sellers/{id}",
            get(handlers::admin::get_seller).delete(handlers::admin::delete_seller),
        )
        .route("/api/admin/sellers/{id}/block", put(handlers::admin::block_seller))
        .route("/api/admin/sellers/{id}/products", get(handlers::admin::seller_products))
        .route("/api/admin/products", get(handlers::products::list_products))
        .route("/api/admin/products/{id}/approve", put(handlers::products::approve_product))
        .route("/api/admin/products/{id}/reject", put(handlers::products::reject_product))
        .route(
            "/api/admin/products/{id}",
            axum::routing::delete(handlers::products::delete_product),
        )
        .route("/api/admin/analytics/sales", get(handlers::admin::analytics_sales))
        .route("/api/admin/analytics/users", get(handlers::admin::analytics_users))
        .route("/api/admin/stats/category-stats", get(handlers::admin::category_stats));

    // Painel do vendedor
    let seller_routes = Router::new()
        .route(
            "/api/seller/products",
            post(handlers::products::submit_product).get(handlers::products::my_products),
        )
        .route(
            "/api/seller/products/approved",
            get(handlers::products::my_approved_products),
        )
        .route("/api/stats/overview", get(handlers::stats::overview))
        .route("/api/stats/sales-graph", get(handlers::stats::sales_graph))
        .route("/api/stats/order-status", get(handlers::stats::order_status))
        .route("/api/stats/category-stats", get(handlers::stats::category_stats))
        .route("/api/stats/inventory", get(handlers::stats::inventory))
        .route(
            "/api/stats/inventory-management",
            get(handlers::stats::inventory_management),
        );

    // Contato/suporte: criação pública, gestão pelo admin
    let contact_routes = Router::new()
        .route(
            "/api/contact",
            post(handlers::contact::create_message).get(handlers::contact::list_messages),
        )
        .route(
            "/api/contact/{id}",
            put(handlers::contact::respond_message).delete(handlers::contact::delete_message),
        );

    // Caixa de notificações de qualquer principal autenticado
    let notification_routes = Router::new()
        .route("/api/notifications", get(handlers::notifications::list_notifications))
        .route("/api/notifications/read-all", put(handlers::notifications::mark_all_read))
        .route("/api/notifications/{id}/read", put(handlers::notifications::mark_read))
        .route(
            "/api/notifications/{id}",
            axum::routing::delete(handlers::notifications::delete_notification),
        );

    // Vitrine pública
    let storefront_routes = Router::new()
        .route("/api/products", get(handlers::products::list_storefront))
        .route("/api/products/{id}", get(handlers::products::get_storefront_product));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(auth_routes)
        .merge(admin_routes)
        .merge(seller_routes)
        .merge(contact_routes)
        .merge(notification_routes)
        .merge(storefront_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}

// Com ADMIN_EMAIL e ADMIN_PASSWORD definidos e nenhum admin no banco,
// cria o primeiro. Nunca roda dentro de um handler.
async fn bootstrap_admin(app_state: &AppState) {
    let (email, password) = match (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(email), Ok(password)) => (email, password),
        _ => return,
    };

    match app_state.auth_service.bootstrap_admin(&email, &password).await {
        Ok(true) => tracing::info!("Admin inicial criado a partir do ambiente"),
        Ok(false) => {}
        Err(e) => tracing::error!("Falha no bootstrap do admin: {e}"),
    }
}
