// src/services/stats_service.rs

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, time::TimeFilter},
    db::{
        StatsRepository,
        stats_repo::{InventoryRow, ProductSalesRow, StatusCountRow},
    },
    models::{
        order::OrderItemStatus,
        stats::{
            AlertCard, CategoryCount, CategorySales, InventoryManagement, InventoryMetrics,
            InventoryProduct, InventorySummary, MonthlySales, OutOfStockProduct,
            OverviewStats, ProductSales, SalesPoint, StatusCount, StockStatus,
            WeekdayActiveUsers,
        },
    },
};

// Agregador de estatísticas: as consultas vivem na repo; a montagem dos
// relatórios é feita aqui, em funções puras testáveis sem banco.
#[derive(Clone)]
pub struct StatsService {
    stats_repo: StatsRepository,
}

impl StatsService {
    pub fn new(stats_repo: StatsRepository) -> Self {
        Self { stats_repo }
    }

    // ---
    // Painel do vendedor
    // ---

    pub async fn overview(
        &self,
        seller_id: Uuid,
        filter: TimeFilter,
    ) -> Result<OverviewStats, AppError> {
        let (from, to) = filter.range();
        let pool = self.stats_repo.pool();

        let totals = self.stats_repo.overview(pool, seller_id, from, to).await?;
        let total_products = self.stats_repo.count_approved_products(pool, seller_id).await?;
        let top_products = self
            .stats_repo
            .top_products(pool, seller_id, from, to, 5)
            .await?;

        Ok(OverviewStats {
            total_orders: totals.total_orders,
            total_revenue: totals.total_revenue,
            total_products,
            total_customers: totals.total_customers,
            top_products,
            time_filter: filter.as_str().to_string(),
        })
    }

    pub async fn sales_over_time(
        &self,
        seller_id: Uuid,
        filter: TimeFilter,
    ) -> Result<Vec<SalesPoint>, AppError> {
        let (from, to) = filter.range();
        self.stats_repo
            .sales_by_day(self.stats_repo.pool(), seller_id, from, to)
            .await
    }

    pub async fn order_status_distribution(
        &self,
        seller_id: Uuid,
        filter: TimeFilter,
    ) -> Result<Vec<StatusCount>, AppError> {
        let (from, to) = filter.range();
        let rows = self
            .stats_repo
            .status_counts(self.stats_repo.pool(), seller_id, from, to)
            .await?;
        Ok(zero_filled_distribution(&rows))
    }

    pub async fn orders_by_category(
        &self,
        seller_id: Uuid,
        filter: TimeFilter,
    ) -> Result<Vec<CategorySales>, AppError> {
        let (from, to) = filter.range();
        self.stats_repo
            .category_sales(self.stats_repo.pool(), seller_id, from, to)
            .await
    }

    pub async fn inventory_metrics(&self, seller_id: Uuid) -> Result<InventoryMetrics, AppError> {
        let rows = self
            .stats_repo
            .inventory_rows(self.stats_repo.pool(), seller_id)
            .await?;
        Ok(build_inventory_metrics(rows))
    }

    pub async fn inventory_management(
        &self,
        seller_id: Uuid,
    ) -> Result<InventoryManagement, AppError> {
        let pool = self.stats_repo.pool();
        let rows = self.stats_repo.inventory_rows(pool, seller_id).await?;

        let (today_from, today_to) = TimeFilter::Today.range();
        let today_sales = self
            .stats_repo
            .product_sales(pool, seller_id, today_from, today_to)
            .await?;

        Ok(build_inventory_management(rows, today_sales.first()))
    }

    // ---
    // Painel admin
    // ---

    pub async fn monthly_sales(&self, year: i32) -> Result<Vec<MonthlySales>, AppError> {
        let rows = self
            .stats_repo
            .monthly_sales(self.stats_repo.pool(), year)
            .await?;
        let mut by_month = [Decimal::ZERO; 12];
        for row in rows {
            if (1..=12).contains(&row.month) {
                by_month[(row.month - 1) as usize] = row.sales;
            }
        }
        Ok(by_month
            .iter()
            .enumerate()
            .map(|(i, sales)| MonthlySales {
                name: month_name(i as u32 + 1).to_string(),
                sales: *sales,
            })
            .collect())
    }

    pub async fn category_counts(&self) -> Result<Vec<CategoryCount>, AppError> {
        self.stats_repo.category_counts(self.stats_repo.pool()).await
    }

    // Usuários ativos na última semana, agrupados pelo dia da semana do
    // último login. Dias sem atividade não aparecem.
    pub async fn weekly_active_users(&self) -> Result<Vec<WeekdayActiveUsers>, AppError> {
        let since = Utc::now() - Duration::days(7);
        let rows = self
            .stats_repo
            .active_users_by_weekday(self.stats_repo.pool(), since)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| WeekdayActiveUsers {
                name: weekday_name(r.weekday).to_string(),
                users: r.users,
            })
            .collect())
    }
}

// Métricas de inventário sobre o catálogo aprovado INTEIRO: produto que
// nunca vendeu entra com zero e pode ser o "menos vendido".
pub fn build_inventory_metrics(rows: Vec<InventoryRow>) -> InventoryMetrics {
    let total_stock_count: i64 = rows.iter().map(|r| i64::from(r.in_stock)).sum();
    let total_stock_value: Decimal = rows
        .iter()
        .map(|r| r.price * Decimal::from(r.in_stock))
        .sum();

    let out_of_stock = rows
        .iter()
        .filter(|r| r.in_stock == 0)
        .map(|r| OutOfStockProduct {
            id: r.id,
            name: r.name.clone(),
            category: r.category.clone(),
            subcategory: r.subcategory.clone(),
        })
        .collect();

    // Ordenação estável: empates ficam na ordem em que as linhas chegaram.
    let mut by_sold: Vec<&InventoryRow> = rows.iter().collect();
    by_sold.sort_by_key(|r| std::cmp::Reverse(r.total_sold));

    let top_selling = by_sold.first().map(|r| lifetime_sales(r));
    let lowest_selling = by_sold.last().map(|r| lifetime_sales(r));

    InventoryMetrics {
        total_stock_count,
        total_stock_value,
        out_of_stock,
        top_selling,
        lowest_selling,
    }
}

fn lifetime_sales(row: &InventoryRow) -> ProductSales {
    ProductSales {
        id: row.id,
        name: row.name.clone(),
        units_sold: row.total_sold,
        category: row.category.clone(),
        subcategory: row.subcategory.clone(),
    }
}

// As cinco chaves do vocabulário sempre presentes, zeradas quando o
// período não tem itens naquele status.
pub fn zero_filled_distribution(rows: &[StatusCountRow]) -> Vec<StatusCount> {
    OrderItemStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: rows
                .iter()
                .find(|r| r.status == *status)
                .map(|r| r.count)
                .unwrap_or(0),
        })
        .collect()
}

// EXTRACT(DOW) do Postgres: 0 = domingo .. 6 = sábado.
pub fn weekday_name(dow: i32) -> &'static str {
    match dow {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        _ => "Sat",
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

// Monta o relatório de gestão de inventário a partir das linhas já lidas:
// classificação de estoque, ordenação esgotado → baixo → ok, os quatro
// cards de alerta e o sumário.
pub fn build_inventory_management(
    rows: Vec<InventoryRow>,
    today_top: Option<&ProductSalesRow>,
) -> InventoryManagement {
    let total_stock_value: Decimal = rows
        .iter()
        .map(|r| r.price * Decimal::from(r.in_stock))
        .sum();

    let mut products: Vec<InventoryProduct> = rows
        .into_iter()
        .map(|r| InventoryProduct {
            id: r.id,
            name: r.name,
            category: r.category,
            subcategory: r.subcategory.unwrap_or_else(|| "N/A".to_string()),
            stock: r.in_stock,
            price: r.price,
            status: StockStatus::classify(r.in_stock),
            image: r.image,
            total_sold: r.total_sold,
            revenue: r.revenue,
            created_at: r.created_at,
        })
        .collect();
    products.sort_by_key(|p| p.status.sort_rank());

    let low_stock: Vec<&InventoryProduct> = products
        .iter()
        .filter(|p| p.status == StockStatus::LowStock)
        .collect();
    let out_of_stock: Vec<&InventoryProduct> = products
        .iter()
        .filter(|p| p.status == StockStatus::OutOfStock)
        .collect();
    let in_stock_count = products
        .iter()
        .filter(|p| p.status == StockStatus::InStock)
        .count();

    // Os quatro cards existem sempre; sem dados, entram com os textos
    // neutros que o painel renderiza.
    let alert_cards = vec![
        AlertCard {
            title: "Total Stock Value".to_string(),
            product: None,
            count: format!("${:.2}", total_stock_value),
            kind: "value".to_string(),
            product_id: None,
            total_low_stock: None,
            total_out_of_stock: None,
        },
        AlertCard {
            title: "High Demand".to_string(),
            product: Some(
                today_top
                    .map(|top| top.name.clone())
                    .unwrap_or_else(|| "No sales today".to_string()),
            ),
            count: today_top
                .map(|top| format!("{} sold today", top.units_sold))
                .unwrap_or_else(|| "0 sold today".to_string()),
            kind: "demand".to_string(),
            product_id: today_top.map(|top| top.id),
            total_low_stock: None,
            total_out_of_stock: None,
        },
        AlertCard {
            title: "Low Stock Alert".to_string(),
            product: Some(
                low_stock
                    .first()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "All stocked well".to_string()),
            ),
            count: low_stock
                .first()
                .map(|p| format!("{} left", p.stock))
                .unwrap_or_else(|| "No alerts".to_string()),
            kind: "low-stock".to_string(),
            product_id: low_stock.first().map(|p| p.id),
            total_low_stock: Some(low_stock.len()),
            total_out_of_stock: None,
        },
        AlertCard {
            title: "Out of Stock".to_string(),
            product: Some(
                out_of_stock
                    .first()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "All products available".to_string()),
            ),
            count: if out_of_stock.is_empty() {
                "No issues".to_string()
            } else {
                "Restock needed".to_string()
            },
            kind: "out-of-stock".to_string(),
            product_id: out_of_stock.first().map(|p| p.id),
            total_low_stock: None,
            total_out_of_stock: Some(out_of_stock.len()),
        },
    ];

    let summary = InventorySummary {
        total_products: products.len(),
        in_stock: in_stock_count,
        low_stock: low_stock.len(),
        out_of_stock: out_of_stock.len(),
        total_stock_value,
    };

    InventoryManagement { alert_cards, products, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(name: &str, stock: i32, price: i64, sold: i64) -> InventoryRow {
        InventoryRow {
            id: Uuid::new_v4(),
            name: name.into(),
            category: "Home".into(),
            subcategory: None,
            in_stock: stock,
            price: Decimal::from(price),
            image: None,
            total_sold: sold,
            revenue: Decimal::from(price * sold),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn distribution_always_has_the_five_statuses() {
        let rows = vec![StatusCountRow { status: OrderItemStatus::Shipped, count: 3 }];
        let dist = zero_filled_distribution(&rows);
        assert_eq!(dist.len(), 5);
        assert_eq!(dist[0].status, OrderItemStatus::Processing);
        assert_eq!(dist[0].count, 0);
        assert_eq!(dist[1].status, OrderItemStatus::Shipped);
        assert_eq!(dist[1].count, 3);
        assert!(dist.iter().all(|s| s.count >= 0));
    }

    #[test]
    fn distribution_of_empty_period_is_all_zeros() {
        let dist = zero_filled_distribution(&[]);
        assert_eq!(dist.len(), 5);
        assert!(dist.iter().all(|s| s.count == 0));
    }

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(6), "Jun");
        assert_eq!(month_name(12), "Dec");
    }

    #[test]
    fn inventory_sorts_out_of_stock_first() {
        let rows = vec![row("ok", 50, 10, 5), row("baixo", 3, 10, 2), row("zerado", 0, 10, 0)];
        let report = build_inventory_management(rows, None);
        assert_eq!(report.products[0].name, "zerado");
        assert_eq!(report.products[1].name, "baixo");
        assert_eq!(report.products[2].name, "ok");
    }

    #[test]
    fn inventory_summary_counts_each_bucket() {
        let rows = vec![row("a", 50, 10, 0), row("b", 3, 20, 0), row("c", 0, 5, 0)];
        let report = build_inventory_management(rows, None);
        assert_eq!(report.summary.total_products, 3);
        assert_eq!(report.summary.in_stock, 1);
        assert_eq!(report.summary.low_stock, 1);
        assert_eq!(report.summary.out_of_stock, 1);
        // 50*10 + 3*20 + 0*5
        assert_eq!(report.summary.total_stock_value, Decimal::from(560));
    }

    #[test]
    fn empty_catalogue_still_renders_the_four_cards() {
        let report = build_inventory_management(vec![], None);
        assert_eq!(report.alert_cards.len(), 4);
        assert!(report.products.is_empty());

        let demand = &report.alert_cards[1];
        assert_eq!(demand.product.as_deref(), Some("No sales today"));
        assert_eq!(demand.count, "0 sold today");

        let low = &report.alert_cards[2];
        assert_eq!(low.product.as_deref(), Some("All stocked well"));
        assert_eq!(low.count, "No alerts");
        assert_eq!(low.total_low_stock, Some(0));

        let out = &report.alert_cards[3];
        assert_eq!(out.product.as_deref(), Some("All products available"));
        assert_eq!(out.count, "No issues");
        assert_eq!(out.total_out_of_stock, Some(0));
    }

    #[test]
    fn alert_card_kinds_match_the_panel_vocabulary() {
        let report = build_inventory_management(vec![], None);
        let kinds: Vec<&str> = report.alert_cards.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, ["value", "demand", "low-stock", "out-of-stock"]);
    }

    #[test]
    fn out_of_stock_card_asks_for_restock() {
        let report = build_inventory_management(vec![row("zerado", 0, 10, 0)], None);
        let out = &report.alert_cards[3];
        assert_eq!(out.product.as_deref(), Some("zerado"));
        assert_eq!(out.count, "Restock needed");
        assert_eq!(out.total_out_of_stock, Some(1));
    }

    #[test]
    fn stock_value_card_always_shows_two_decimals() {
        let rows = vec![row("a", 50, 10, 0), row("b", 3, 20, 0)];
        let report = build_inventory_management(rows, None);
        assert_eq!(report.alert_cards[0].count, "$560.00");
    }

    #[test]
    fn high_demand_card_names_todays_top_product() {
        let rows = vec![row("estrela", 20, 10, 7)];
        let top = ProductSalesRow {
            id: rows[0].id,
            name: "estrela".into(),
            units_sold: 7,
            category: "Home".into(),
            subcategory: None,
        };
        let report = build_inventory_management(rows, Some(&top));
        let demand = report
            .alert_cards
            .iter()
            .find(|c| c.kind == "demand")
            .expect("card de demanda presente");
        assert_eq!(demand.product.as_deref(), Some("estrela"));
        assert_eq!(demand.count, "7 sold today");
    }

    #[test]
    fn missing_subcategory_renders_as_na() {
        let report = build_inventory_management(vec![row("a", 5, 10, 0)], None);
        assert_eq!(report.products[0].subcategory, "N/A");
    }

    #[test]
    fn inventory_extremes_span_the_whole_catalogue() {
        // "parado" nunca vendeu e mesmo assim é o menos vendido.
        let rows = vec![row("campeao", 20, 10, 9), row("parado", 5, 10, 0)];
        let metrics = build_inventory_metrics(rows);

        let top = metrics.top_selling.expect("campeão presente");
        assert_eq!(top.name, "campeao");
        assert_eq!(top.units_sold, 9);

        let lowest = metrics.lowest_selling.expect("menos vendido presente");
        assert_eq!(lowest.name, "parado");
        assert_eq!(lowest.units_sold, 0);
    }

    #[test]
    fn inventory_extremes_exist_even_without_any_sale() {
        let rows = vec![row("a", 5, 10, 0), row("b", 8, 10, 0)];
        let metrics = build_inventory_metrics(rows);
        assert!(metrics.top_selling.is_some());
        assert!(metrics.lowest_selling.is_some());
        assert_eq!(metrics.top_selling.unwrap().units_sold, 0);
    }

    #[test]
    fn inventory_metrics_of_empty_catalogue_are_zeroed() {
        let metrics = build_inventory_metrics(vec![]);
        assert_eq!(metrics.total_stock_count, 0);
        assert_eq!(metrics.total_stock_value, Decimal::ZERO);
        assert!(metrics.out_of_stock.is_empty());
        assert!(metrics.top_selling.is_none());
        assert!(metrics.lowest_selling.is_none());
    }

    #[test]
    fn inventory_totals_and_out_of_stock_list() {
        let rows = vec![row("a", 50, 10, 0), row("b", 0, 20, 0), row("c", 3, 5, 0)];
        let metrics = build_inventory_metrics(rows);
        assert_eq!(metrics.total_stock_count, 53);
        // 50*10 + 0*20 + 3*5
        assert_eq!(metrics.total_stock_value, Decimal::from(515));
        assert_eq!(metrics.out_of_stock.len(), 1);
        assert_eq!(metrics.out_of_stock[0].name, "b");
    }

    #[test]
    fn weekday_names_start_on_sunday() {
        assert_eq!(weekday_name(0), "Sun");
        assert_eq!(weekday_name(3), "Wed");
        assert_eq!(weekday_name(6), "Sat");
    }
}
