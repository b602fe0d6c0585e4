//! Search Module
//!
//! Stateless lookups over a snapshot of the product collection.

use std::cmp::Ordering;

use crate::inventory::Product;

// == Linear Search ==
/// Returns the first product whose identifier matches exactly. O(n).
pub fn linear_search_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

// == Binary Search ==
/// Finds a product by name, ignoring case.
///
/// Sorts a copy of the collection by lowercased name, then bisects it with
/// the same lowercased comparison. O(n log n) overall because of the sort.
pub fn binary_search_by_name(products: &[Product], name: &str) -> Option<Product> {
    if products.is_empty() {
        return None;
    }

    let target = name.to_lowercase();
    let mut sorted: Vec<(String, &Product)> =
        products.iter().map(|p| (p.name.to_lowercase(), p)).collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut left = 0usize;
    let mut right = sorted.len();
    while left < right {
        let mid = left + (right - left) / 2;
        let (mid_name, product) = &sorted[mid];
        match mid_name.as_str().cmp(target.as_str()) {
            Ordering::Equal => return Some((*product).clone()),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    None
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn catalog() -> Vec<Product> {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        vec![
            Product::new("PROD_1", "Milk", date),
            Product::new("PROD_2", "Eggs", date),
            Product::new("PROD_3", "Bread", date),
        ]
    }

    #[test]
    fn test_linear_search_found() {
        let products = catalog();
        let found = linear_search_by_id(&products, "PROD_2").unwrap();
        assert_eq!(found.name, "Eggs");
    }

    #[test]
    fn test_linear_search_first_match_wins() {
        let mut products = catalog();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        products.push(Product::new("PROD_2", "Duplicate", date));
        assert_eq!(linear_search_by_id(&products, "PROD_2").unwrap().name, "Eggs");
    }

    #[test]
    fn test_linear_search_not_found() {
        assert!(linear_search_by_id(&catalog(), "PROD_99").is_none());
        assert!(linear_search_by_id(&[], "PROD_1").is_none());
    }

    #[test]
    fn test_binary_search_ignores_case() {
        let products = catalog();
        for query in ["eggs", "EGGS", "Eggs", "eGgS"] {
            let found = binary_search_by_name(&products, query).unwrap();
            assert_eq!(found.id, "PROD_2");
        }
    }

    #[test]
    fn test_binary_search_mixed_case_names() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        // "apple" sorts after "Zucchini" by raw bytes but before it ignoring case.
        let products = vec![
            Product::new("1", "Zucchini", date),
            Product::new("2", "apple", date),
            Product::new("3", "Banana", date),
        ];
        assert_eq!(binary_search_by_name(&products, "APPLE").unwrap().id, "2");
        assert_eq!(binary_search_by_name(&products, "zucchini").unwrap().id, "1");
        assert_eq!(binary_search_by_name(&products, "banana").unwrap().id, "3");
    }

    #[test]
    fn test_binary_search_not_found() {
        assert!(binary_search_by_name(&catalog(), "Cheese").is_none());
    }

    #[test]
    fn test_binary_search_empty() {
        assert!(binary_search_by_name(&[], "Milk").is_none());
    }
}
