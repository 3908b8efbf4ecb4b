use crate::api::{ApiClient, ApiError};
use crate::model::{ModelId, Product};
use std::collections::BTreeSet;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

pub async fn fetch_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get("/products", None).await
}

pub async fn fetch_product(api: &ApiClient, id: ModelId) -> Result<Product, ApiError> {
    api.get(&format!("/products/{id}"), None).await
}

/// Narrow the product list by a free-text search (name or description,
/// case-insensitive) and/or an exact category. Input order is preserved.
pub fn filter_products<'a>(
    products: &'a [Product],
    search: Option<&str>,
    category: Option<&str>,
) -> Vec<&'a Product> {
    let needle = search.map(str::to_lowercase);
    products
        .iter()
        .filter(|product| {
            let matches_search = needle.as_deref().is_none_or(|term| {
                product.name.to_lowercase().contains(term)
                    || product.description.to_lowercase().contains(term)
            });
            let matches_category = category.is_none_or(|c| product.category == c);
            matches_search && matches_category
        })
        .collect()
}

/// Distinct categories across the catalog, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|product| product.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Resolve a product image path against the backend host, falling back to a
/// placeholder when none is set.
pub fn image_url(backend_base_url: &str, image: Option<&str>) -> String {
    match image {
        Some(path) if !path.is_empty() => {
            format!("{}{}", backend_base_url.trim_end_matches('/'), path)
        }
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ModelId, name: &str, description: &str, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price: 100.0,
            quantity: 10,
            category: category.to_string(),
            image: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Red Apples", "Crisp and sweet", "Fruits"),
            product(2, "Bananas", "Ripe cavendish", "Fruits"),
            product(3, "Chicken Breast", "Fresh cuts", "Meat"),
            product(4, "Sourdough Loaf", "Baked daily, apple-wood fired", "Bakery"),
        ]
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let catalog = sample_catalog();
        let hits = filter_products(&catalog, Some("apple"), None);
        let ids: Vec<_> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = sample_catalog();
        let hits = filter_products(&catalog, None, Some("Fruits"));
        assert_eq!(hits.len(), 2);
        let none = filter_products(&catalog, None, Some("fruits"));
        assert!(none.is_empty());
    }

    #[test]
    fn search_and_category_combine() {
        let catalog = sample_catalog();
        let hits = filter_products(&catalog, Some("apple"), Some("Fruits"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let catalog = sample_catalog();
        let hits = filter_products(&catalog, None, None);
        let ids: Vec<_> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let catalog = sample_catalog();
        assert_eq!(categories(&catalog), vec!["Bakery", "Fruits", "Meat"]);
    }

    #[test]
    fn image_url_falls_back_to_placeholder() {
        assert_eq!(image_url("http://localhost:8080", None), PLACEHOLDER_IMAGE);
        assert_eq!(image_url("http://localhost:8080", Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(
            image_url("http://localhost:8080/", Some("/images/apple.png")),
            "http://localhost:8080/images/apple.png"
        );
    }
}
