// src/models/order.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Vocabulário fixo de status de entrega de um item do pedido. As agregações
// sempre reportam as cinco chaves, zeradas quando ausentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "order_item_status")]
pub enum OrderItemStatus {
    #[sqlx(rename = "Processing")]
    Processing,
    #[sqlx(rename = "Shipped")]
    Shipped,
    #[sqlx(rename = "Out for Delivery")]
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[sqlx(rename = "Delivered")]
    Delivered,
    #[sqlx(rename = "Cancelled")]
    Cancelled,
}

impl OrderItemStatus {
    pub const ALL: [OrderItemStatus; 5] = [
        OrderItemStatus::Processing,
        OrderItemStatus::Shipped,
        OrderItemStatus::OutForDelivery,
        OrderItemStatus::Delivered,
        OrderItemStatus::Cancelled,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_vocabulary_has_five_entries() {
        assert_eq!(OrderItemStatus::ALL.len(), 5);
    }

    #[test]
    fn out_for_delivery_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&OrderItemStatus::OutForDelivery).unwrap(),
            "\"Out for Delivery\""
        );
        assert_eq!(
            serde_json::to_string(&OrderItemStatus::Processing).unwrap(),
            "\"Processing\""
        );
    }
}
