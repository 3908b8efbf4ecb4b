use crate::api::OrderApi;
use crate::bucket::{StatusBucket, filter_by_bucket};
use crate::model::{DeliveryAgent, ModelId, Order, OrderAction, OrderStatus};
use crate::store::{OrderStats, OrderStore};
use std::sync::Arc;
use tracing::{error, info};

/// Transient operator-facing notice. Read once via `take_notices`, which is
/// the dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Order lifecycle view model backing the admin screens.
///
/// Every mutation follows mutate-then-refetch: one HTTP call, then a full
/// store reload on success. Nothing is applied optimistically, so a failed
/// call leaves the cache exactly as it was and the operator simply retries.
/// Failures are logged, converted into a notice, and never escalated or
/// retried automatically.
pub struct OrderConsole {
    api: Arc<dyn OrderApi>,
    store: OrderStore,
    agents: Vec<DeliveryAgent>,
    notices: Vec<Notice>,
}

impl OrderConsole {
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        Self {
            api,
            store: OrderStore::new(),
            agents: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Wholesale reload of the order store.
    pub async fn refresh(&mut self) -> bool {
        match self.api.fetch_orders().await {
            Ok(orders) => {
                info!(count = orders.len(), "loaded orders");
                self.store.replace(orders);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to load orders");
                self.push_error("Failed to load orders");
                false
            }
        }
    }

    pub async fn load_agents(&mut self) {
        match self.api.available_agents().await {
            Ok(agents) => self.agents = agents,
            Err(err) => {
                error!(error = %err, "failed to load delivery agents");
                self.push_error("Failed to load delivery agents");
            }
        }
    }

    pub async fn approve(&mut self, order_id: ModelId) {
        match self.api.approve(order_id).await {
            Ok(()) => {
                self.push_success("Order approved successfully");
                self.refresh().await;
            }
            Err(err) => {
                error!(error = %err, order_id, "failed to approve order");
                self.push_error("Failed to approve order");
            }
        }
    }

    /// Assignment requires a selected agent; an empty selection is rejected
    /// here, before any request goes out.
    pub async fn assign_agent(&mut self, order_id: ModelId, agent_id: Option<ModelId>) {
        let Some(agent_id) = agent_id else {
            self.push_error("Please select a delivery agent");
            return;
        };
        match self.api.assign_agent(order_id, agent_id).await {
            Ok(()) => {
                self.push_success("Delivery agent assigned successfully");
                self.refresh().await;
            }
            Err(err) => {
                error!(error = %err, order_id, agent_id, "failed to assign agent");
                self.push_error("Failed to assign agent");
            }
        }
    }

    pub async fn start_delivery(&mut self, order_id: ModelId) {
        self.update_status(order_id, OrderStatus::InDelivery).await;
    }

    pub async fn mark_delivered(&mut self, order_id: ModelId) {
        self.update_status(order_id, OrderStatus::Delivered).await;
    }

    pub async fn update_status(&mut self, order_id: ModelId, status: OrderStatus) {
        match self.api.update_status(order_id, status).await {
            Ok(()) => {
                self.push_success("Order status updated successfully");
                self.refresh().await;
            }
            Err(err) => {
                error!(error = %err, order_id, %status, "failed to update order status");
                self.push_error("Failed to update order status");
            }
        }
    }

    /// Dispatch the single forward transition the order's current state
    /// offers. Assignment is excluded since it needs an agent selection.
    pub async fn advance(&mut self, order_id: ModelId) {
        let Some(action) = self
            .store
            .get(order_id)
            .and_then(|order| order.status.next_action())
        else {
            self.push_error("Order has no further action");
            return;
        };

        match action {
            OrderAction::Approve => self.approve(order_id).await,
            OrderAction::AssignAgent => {
                self.push_error("Please select a delivery agent");
            }
            OrderAction::StartDelivery => self.start_delivery(order_id).await,
            OrderAction::MarkDelivered => self.mark_delivered(order_id).await,
        }
    }

    /// Lazy line-item hydration for a row expand. Fetches the detail record
    /// only when the cached order lacks items; a second expand of a hydrated
    /// row performs no network call.
    pub async fn expand(&mut self, order_id: ModelId) -> bool {
        if self.store.is_hydrated(order_id) {
            return true;
        }
        if self.store.get(order_id).is_none() {
            self.push_error("Order not found");
            return false;
        }
        match self.api.fetch_order(order_id).await {
            Ok(detail) => {
                self.store.merge_items(order_id, detail.order_items);
                true
            }
            Err(err) => {
                error!(error = %err, order_id, "failed to fetch order items");
                self.push_error("Failed to fetch order items");
                false
            }
        }
    }

    pub fn bucket(&self, bucket: StatusBucket) -> Vec<&Order> {
        filter_by_bucket(self.store.orders(), bucket)
    }

    /// Bucket projection narrowed by the free-text search.
    pub fn search(&self, bucket: StatusBucket, term: &str) -> Vec<&Order> {
        self.bucket(bucket)
            .into_iter()
            .filter(|order| order.matches_search(term))
            .collect()
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn agents(&self) -> &[DeliveryAgent] {
        &self.agents
    }

    pub fn stats(&self) -> OrderStats {
        self.store.stats()
    }

    /// Drain pending notices; the caller displays and thereby dismisses them.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn push_success(&mut self, text: &str) {
        self.notices.push(Notice::Success(text.to_string()));
    }

    fn push_error(&mut self, text: &str) {
        self.notices.push(Notice::Error(text.to_string()));
    }
}
