// src/handlers/stats.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::{error::AppError, time::TimeFilter},
    config::AppState,
    middleware::auth::AuthSeller,
    models::stats::StatsEnvelope,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct FilterQuery {
    // "today" | "week" | "month"; ausente cai em month, desconhecido em all-time.
    pub filter: Option<String>,
}

impl FilterQuery {
    // Os painéis abrem no mês corrente: sem ?filter= a janela é month.
    fn parse(&self) -> TimeFilter {
        match self.filter.as_deref() {
            None => TimeFilter::Month,
            some => TimeFilter::parse(some),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/stats/overview",
    tag = "Stats",
    params(FilterQuery),
    responses(
        (status = 200, description = "Totais do período + top 5 produtos, em {success, data}"),
        (status = 401, description = "Token inválido"),
        (status = 403, description = "Conta bloqueada")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn overview(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .stats_service
        .overview(seller.id, query.parse())
        .await?;
    Ok(Json(StatsEnvelope::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/stats/sales-graph",
    tag = "Stats",
    params(FilterQuery),
    responses(
        (status = 200, description = "Receita por dia do período, datas ascendentes")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn sales_graph(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .stats_service
        .sales_over_time(seller.id, query.parse())
        .await?;
    Ok(Json(StatsEnvelope::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/stats/order-status",
    tag = "Stats",
    params(FilterQuery),
    responses(
        (status = 200, description = "Contagem por status de entrega, sempre as cinco chaves")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn order_status(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .stats_service
        .order_status_distribution(seller.id, query.parse())
        .await?;
    Ok(Json(StatsEnvelope::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/stats/category-stats",
    tag = "Stats",
    params(FilterQuery),
    responses(
        (status = 200, description = "Receita e unidades por categoria/subcategoria, receita decrescente")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn category_stats(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .stats_service
        .orders_by_category(seller.id, query.parse())
        .await?;
    Ok(Json(StatsEnvelope::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/stats/inventory",
    tag = "Stats",
    responses(
        (status = 200, description = "Métricas de estoque e extremos de venda do catálogo")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn inventory(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state.stats_service.inventory_metrics(seller.id).await?;
    Ok(Json(StatsEnvelope::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/stats/inventory-management",
    tag = "Stats",
    responses(
        (status = 200, description = "Relatório de gestão de inventário: cards, produtos e sumário")
    ),
    security(("bearer_jwt" = []))
)]
pub async fn inventory_management(
    State(app_state): State<AppState>,
    AuthSeller(seller): AuthSeller,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .stats_service
        .inventory_management(seller.id)
        .await?;
    Ok(Json(StatsEnvelope::new(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(filter: Option<&str>) -> FilterQuery {
        FilterQuery { filter: filter.map(str::to_string) }
    }

    #[test]
    fn absent_filter_defaults_to_current_month() {
        assert_eq!(query(None).parse(), TimeFilter::Month);
    }

    #[test]
    fn explicit_filters_are_honored() {
        assert_eq!(query(Some("today")).parse(), TimeFilter::Today);
        assert_eq!(query(Some("week")).parse(), TimeFilter::Week);
        assert_eq!(query(Some("month")).parse(), TimeFilter::Month);
    }

    #[test]
    fn unknown_filter_falls_back_to_all_time() {
        assert_eq!(query(Some("yesterday")).parse(), TimeFilter::AllTime);
        assert_eq!(query(Some("")).parse(), TimeFilter::AllTime);
    }
}
