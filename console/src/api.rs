use crate::model::{DeliveryAgent, ModelId, Order, OrderStatus};
use async_trait::async_trait;
use serde_json::json;
use storefront::api::{ApiClient, ApiError};
use storefront::session::Session;

/// REST surface of the order backend consumed by the admin console.
/// Mutations return nothing useful; callers re-fetch the full order list
/// afterwards rather than patching state locally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Single order including hydrated line items.
    async fn fetch_order(&self, id: ModelId) -> Result<Order, ApiError>;

    async fn approve(&self, id: ModelId) -> Result<(), ApiError>;

    async fn assign_agent(&self, id: ModelId, agent_id: ModelId) -> Result<(), ApiError>;

    async fn update_status(&self, id: ModelId, status: OrderStatus) -> Result<(), ApiError>;

    async fn available_agents(&self) -> Result<Vec<DeliveryAgent>, ApiError>;
}

/// Production implementation over the shared JSON client. Owns the admin
/// session so every call carries its bearer token.
pub struct HttpOrderApi {
    api: ApiClient,
    session: Session,
}

impl HttpOrderApi {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.api.get("/orders", Some(&self.session)).await
    }

    async fn fetch_order(&self, id: ModelId) -> Result<Order, ApiError> {
        self.api
            .get(&format!("/orders/{id}"), Some(&self.session))
            .await
    }

    async fn approve(&self, id: ModelId) -> Result<(), ApiError> {
        self.api
            .put_empty(&format!("/orders/{id}/approve"), Some(&self.session))
            .await
    }

    async fn assign_agent(&self, id: ModelId, agent_id: ModelId) -> Result<(), ApiError> {
        self.api
            .put_unit(
                &format!("/orders/{id}/assign"),
                &json!({ "agentId": agent_id }),
                Some(&self.session),
            )
            .await
    }

    async fn update_status(&self, id: ModelId, status: OrderStatus) -> Result<(), ApiError> {
        self.api
            .put_unit(
                &format!("/orders/{id}/status"),
                &json!({ "status": status }),
                Some(&self.session),
            )
            .await
    }

    async fn available_agents(&self) -> Result<Vec<DeliveryAgent>, ApiError> {
        self.api
            .get("/delivery-agents/available", Some(&self.session))
            .await
    }
}
