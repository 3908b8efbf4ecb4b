use crate::model::{ModelId, Order, OrderLineItem, OrderStatus};
use tracing::debug;

/// Client-side cache of the last-fetched order list. Replaced wholesale on
/// every refresh; the only incremental write is the lazy line-item backfill
/// for a single record. Ordering is whatever the backend returned.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, orders: Vec<Order>) {
        debug!(count = orders.len(), "order store refreshed");
        self.orders = orders;
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: ModelId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Identity-preserving merge of freshly fetched line items into one
    /// record. Every other record is untouched. Returns false when the order
    /// is not cached.
    pub fn merge_items(&mut self, id: ModelId, items: Vec<OrderLineItem>) -> bool {
        match self.orders.iter_mut().find(|order| order.id == id) {
            Some(order) => {
                order.order_items = items;
                order.hydrated = true;
                true
            }
            None => false,
        }
    }

    pub fn is_hydrated(&self, id: ModelId) -> bool {
        self.get(id)
            .map(|order| order.hydrated || !order.order_items.is_empty())
            .unwrap_or(false)
    }

    pub fn stats(&self) -> OrderStats {
        let mut stats = OrderStats {
            total: self.orders.len(),
            ..OrderStats::default()
        };
        for order in &self.orders {
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Approved => stats.approved += 1,
                OrderStatus::Assigned => stats.assigned += 1,
                OrderStatus::InDelivery => stats.in_delivery += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

/// Per-status counts over the cached list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub assigned: usize,
    pub in_delivery: usize,
    pub delivered: usize,
    pub cancelled: usize,
}
