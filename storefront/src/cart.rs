use crate::api::{ApiClient, ApiError};
use crate::model::{AddToCartRequest, CartItem, CartTotal, ModelId, UpdateCartItemRequest};

/// What to do with a cart line when the shopper picks a new quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Remove,
    Set(u32),
}

/// Dropping a quantity below one removes the line instead of updating it.
pub fn quantity_change(requested: i64) -> QuantityChange {
    if requested < 1 {
        QuantityChange::Remove
    } else {
        QuantityChange::Set(requested as u32)
    }
}

/// Sum of price × quantity over the cart. Always recomputed, never cached.
pub fn subtotal(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.product.price * f64::from(item.quantity))
        .sum()
}

pub async fn fetch_items(api: &ApiClient, session_id: &str) -> Result<Vec<CartItem>, ApiError> {
    api.get(&format!("/cart/{session_id}"), None).await
}

pub async fn add_item(
    api: &ApiClient,
    session_id: &str,
    request: &AddToCartRequest,
) -> Result<CartItem, ApiError> {
    api.post(&format!("/cart/{session_id}/add"), request, None)
        .await
}

pub async fn update_item(
    api: &ApiClient,
    item_id: ModelId,
    quantity: u32,
) -> Result<CartItem, ApiError> {
    let request = UpdateCartItemRequest { quantity };
    api.put(&format!("/cart/item/{item_id}"), &request, None)
        .await
}

pub async fn remove_item(api: &ApiClient, item_id: ModelId) -> Result<(), ApiError> {
    api.delete(&format!("/cart/item/{item_id}"), None).await
}

pub async fn clear(api: &ApiClient, session_id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/cart/{session_id}/clear"), None).await
}

pub async fn fetch_total(api: &ApiClient, session_id: &str) -> Result<f64, ApiError> {
    let total: CartTotal = api.get(&format!("/cart/{session_id}/total"), None).await?;
    Ok(total.total)
}
