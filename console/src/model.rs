use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub use storefront::model::ModelId;

/// Canonical order lifecycle. Orders move forward along
/// pending → approved → assigned → in_delivery → delivered, with cancelled
/// as an alternate terminal reachable from any non-terminal state. The
/// backend enforces legality; the client only projects the current state and
/// dispatches requested transitions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Approved,
    Assigned,
    InDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The single admin operation offered for an order in this state.
    pub fn next_action(self) -> Option<OrderAction> {
        match self {
            OrderStatus::Pending => Some(OrderAction::Approve),
            OrderStatus::Approved => Some(OrderAction::AssignAgent),
            OrderStatus::Assigned => Some(OrderAction::StartDelivery),
            OrderStatus::InDelivery => Some(OrderAction::MarkDelivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Approve,
    AssignAgent,
    StartDelivery,
    MarkDelivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    #[serde(default)]
    pub id: Option<ModelId>,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderLineItem {
    /// Always derived, never stored.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAgent {
    pub id: ModelId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub available: bool,
}

/// One order as the list endpoint returns it. Customer fields may be
/// partially absent; `orderItems` is empty until hydrated via the detail
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: ModelId,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub delivery_agent: Option<DeliveryAgent>,
    #[serde(default)]
    pub order_items: Vec<OrderLineItem>,
    /// Set once line items have been fetched for this record. Client-side
    /// bookkeeping only, never part of the wire payload.
    #[serde(skip)]
    pub hydrated: bool,
}

impl Order {
    /// Sum of line subtotals. `totalAmount` is supplied independently by the
    /// server, so displays recompute this rather than assuming the two agree.
    pub fn items_subtotal(&self) -> f64 {
        self.order_items.iter().map(OrderLineItem::subtotal).sum()
    }

    /// The server's `totalAmount` arrives fee-inclusive and is shown verbatim.
    pub fn display_total(&self) -> f64 {
        self.total_amount
    }

    pub fn customer_label(&self) -> &str {
        self.customer_name.as_deref().unwrap_or("N/A")
    }

    /// Free-text match over order id, customer name, and customer email.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.id.to_string().contains(&needle)
            || self
                .customer_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
            || self
                .customer_email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(&needle))
    }
}
