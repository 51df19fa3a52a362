// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register_seller,
        handlers::auth::login_seller,
        handlers::auth::login_admin,
        handlers::auth::login_user,
        handlers::auth::verify_admin,
        handlers::auth::get_profile,
        handlers::auth::update_profile,

        // --- Admin ---
        handlers::admin::list_sellers,
        handlers::admin::get_seller,
        handlers::admin::block_seller,
        handlers::admin::delete_seller,
        handlers::admin::seller_products,
        handlers::admin::analytics_sales,
        handlers::admin::analytics_users,
        handlers::admin::category_stats,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::approve_product,
        handlers::products::reject_product,
        handlers::products::delete_product,
        handlers::products::submit_product,
        handlers::products::my_products,
        handlers::products::my_approved_products,
        handlers::products::list_storefront,
        handlers::products::get_storefront_product,

        // --- Contact ---
        handlers::contact::create_message,
        handlers::contact::list_messages,
        handlers::contact::respond_message,
        handlers::contact::delete_message,

        // --- Notifications ---
        handlers::notifications::list_notifications,
        handlers::notifications::mark_read,
        handlers::notifications::mark_all_read,
        handlers::notifications::delete_notification,

        // --- Stats ---
        handlers::stats::overview,
        handlers::stats::sales_graph,
        handlers::stats::order_status,
        handlers::stats::category_stats,
        handlers::stats::inventory,
        handlers::stats::inventory_management,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::Admin,
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            handlers::auth::RegisterSellerResponse,

            // --- Sellers ---
            models::seller::VerificationStatus,
            models::seller::Seller,
            models::seller::SellerOverview,
            models::seller::SellerPublic,
            models::seller::RegisterSellerPayload,
            models::seller::UpdateSellerProfilePayload,
            models::seller::BlockSellerPayload,

            // --- Products ---
            models::product::ApprovalStatus,
            models::product::Product,
            models::product::ProductWithSeller,
            models::product::SubmitProductPayload,
            models::product::ApproveProductPayload,
            models::product::RejectProductPayload,

            // --- Orders ---
            models::order::OrderItemStatus,

            // --- Contact ---
            models::contact::ContactStatus,
            models::contact::ContactMessage,
            models::contact::CreateContactPayload,
            models::contact::RespondContactPayload,

            // --- Notifications ---
            models::notification::RecipientModel,
            models::notification::Notification,
            handlers::notifications::ReadAllResponse,

            // --- Stats ---
            models::stats::OverviewStats,
            models::stats::TopProduct,
            models::stats::SalesPoint,
            models::stats::StatusCount,
            models::stats::CategorySales,
            models::stats::InventoryMetrics,
            models::stats::OutOfStockProduct,
            models::stats::ProductSales,
            models::stats::StockStatus,
            models::stats::InventoryProduct,
            models::stats::AlertCard,
            models::stats::InventorySummary,
            models::stats::InventoryManagement,
            models::stats::MonthlySales,
            models::stats::CategoryCount,
            models::stats::WeekdayActiveUsers,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação, registro e perfil"),
        (name = "Admin", description = "Gestão de vendedores e análises da plataforma"),
        (name = "Products", description = "Submissão, moderação e vitrine de produtos"),
        (name = "Contact", description = "Mensagens de contato e suporte"),
        (name = "Notifications", description = "Caixa de notificações"),
        (name = "Stats", description = "Estatísticas do painel do vendedor")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
