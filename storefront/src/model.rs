use serde::{Deserialize, Serialize};

pub type ModelId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ModelId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Units in stock.
    pub quantity: i64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ModelId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A cart line as returned by the backend. `id` is absent for lines that
/// only exist locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub id: Option<ModelId>,
    pub product: Product,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ModelId,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotal {
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_accepts_camel_case_payload_without_image() {
        let product: Product = serde_json::from_str(
            r#"{"id":3,"name":"Red Rice 5kg","description":"Locally milled",
                "price":1450.0,"quantity":12,"category":"Grains"}"#,
        )
        .unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.category, "Grains");
        assert_eq!(product.image, None);
    }

    #[test]
    fn add_to_cart_request_serializes_camel_case() {
        let body = serde_json::to_value(AddToCartRequest {
            product_id: 9,
            quantity: 2,
        })
        .unwrap();

        assert_eq!(body["productId"], 9);
        assert_eq!(body["quantity"], 2);
    }

    #[test]
    fn auth_response_tolerates_missing_optional_fields() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"Bad credentials"}"#).unwrap();

        assert!(!response.success);
        assert!(response.user.is_none());
        assert!(response.token.is_none());
        assert_eq!(response.message.as_deref(), Some("Bad credentials"));
    }
}
