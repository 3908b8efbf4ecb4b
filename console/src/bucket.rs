use crate::model::{Order, OrderStatus};
use strum_macros::{Display, EnumIter, EnumString};

/// Admin tab keys. Each non-`all` bucket selects exactly one status, so
/// together they partition the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum StatusBucket {
    Pending,
    Approved,
    Assigned,
    InDelivery,
    Delivered,
    Cancelled,
    All,
}

impl StatusBucket {
    pub fn status(self) -> Option<OrderStatus> {
        match self {
            StatusBucket::Pending => Some(OrderStatus::Pending),
            StatusBucket::Approved => Some(OrderStatus::Approved),
            StatusBucket::Assigned => Some(OrderStatus::Assigned),
            StatusBucket::InDelivery => Some(OrderStatus::InDelivery),
            StatusBucket::Delivered => Some(OrderStatus::Delivered),
            StatusBucket::Cancelled => Some(OrderStatus::Cancelled),
            StatusBucket::All => None,
        }
    }

    pub fn matches(self, status: OrderStatus) -> bool {
        self.status().is_none_or(|wanted| wanted == status)
    }
}

/// Pure projection over the cached list. Preserves backend ordering and is
/// recomputed on demand, never cached.
pub fn filter_by_bucket(orders: &[Order], bucket: StatusBucket) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| bucket.matches(order.status))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn order(id: i64, status: OrderStatus) -> Order {
        Order {
            id,
            status,
            total_amount: 500.0,
            created_at: Utc::now(),
            delivery_address: None,
            customer_name: None,
            customer_email: None,
            customer_phone: None,
            delivery_agent: None,
            order_items: Vec::new(),
            hydrated: false,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order(1, OrderStatus::Pending),
            order(2, OrderStatus::Approved),
            order(3, OrderStatus::Pending),
            order(4, OrderStatus::InDelivery),
            order(5, OrderStatus::Cancelled),
        ]
    }

    #[test]
    fn all_returns_every_order_in_backend_order() {
        let orders = sample();
        let ids: Vec<_> = filter_by_bucket(&orders, StatusBucket::All)
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn non_all_buckets_partition_the_list() {
        let orders = sample();
        let mut seen = 0usize;
        for bucket in StatusBucket::iter().filter(|b| *b != StatusBucket::All) {
            let subset = filter_by_bucket(&orders, bucket);
            for order in &subset {
                assert!(bucket.matches(order.status));
            }
            seen += subset.len();
        }
        assert_eq!(seen, orders.len());
    }

    #[test]
    fn bucket_labels_parse_back() {
        assert_eq!(
            StatusBucket::from_str("in_delivery").unwrap(),
            StatusBucket::InDelivery
        );
        assert_eq!(StatusBucket::from_str("all").unwrap(), StatusBucket::All);
        assert!(StatusBucket::from_str("dispatched").is_err());
    }

    #[test]
    fn bucket_label_round_trips_through_display() {
        assert_eq!(StatusBucket::InDelivery.to_string(), "in_delivery");
    }
}
