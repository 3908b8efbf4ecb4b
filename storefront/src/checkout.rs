use crate::cart;
use crate::model::CartItem;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Flat delivery fee, in whole rupees, added on top of the cart subtotal.
pub const DELIVERY_FEE: f64 = 200.0;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Local validation only; nothing is sent until the form passes.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        let required = [
            (self.first_name.as_str(), "first name"),
            (self.last_name.as_str(), "last name"),
            (self.email.as_str(), "email"),
            (self.phone.as_str(), "phone"),
            (self.address.as_str(), "address"),
            (self.city.as_str(), "city"),
            (self.zip_code.as_str(), "zip code"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                problems.push(format!("{label} is required"));
            }
        }
        if !self.email.trim().is_empty() && !EMAIL_RE.is_match(self.email.trim()) {
            problems.push("email address is not valid".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

/// Checkout totals: cart subtotal plus the flat delivery fee.
pub fn summarize(items: &[CartItem]) -> OrderSummary {
    let subtotal = cart::subtotal(items);
    OrderSummary {
        subtotal,
        delivery_fee: DELIVERY_FEE,
        total: subtotal + DELIVERY_FEE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Amali".to_string(),
            last_name: "Perera".to_string(),
            email: "amali@example.com".to_string(),
            phone: "0771234567".to_string(),
            address: "12 Galle Road".to_string(),
            city: "Colombo".to_string(),
            zip_code: "00300".to_string(),
            payment_method: PaymentMethod::Card,
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn every_blank_field_is_reported() {
        let problems = CheckoutForm::default().validate().unwrap_err();
        assert_eq!(problems.len(), 7);
        assert!(problems.contains(&"first name is required".to_string()));
        assert!(problems.contains(&"zip code is required".to_string()));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        let problems = form.validate().unwrap_err();
        assert_eq!(problems, vec!["email address is not valid".to_string()]);
    }

    #[test]
    fn summary_adds_the_flat_delivery_fee() {
        let items = vec![CartItem {
            id: None,
            product: Product {
                id: 1,
                name: "Eggs".to_string(),
                description: String::new(),
                price: 600.0,
                quantity: 30,
                category: "Dairy".to_string(),
                image: None,
            },
            quantity: 2,
        }];

        let summary = summarize(&items);
        assert_eq!(summary.subtotal, 1200.0);
        assert_eq!(summary.delivery_fee, DELIVERY_FEE);
        assert_eq!(summary.total, 1400.0);
    }

    #[test]
    fn empty_cart_still_carries_the_fee() {
        let summary = summarize(&[]);
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.total, DELIVERY_FEE);
    }

    #[test]
    fn payment_method_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Card).unwrap(),
            "\"card\""
        );
    }
}
