//! Integration tests for a full shopping session.
//!
//! These tests drive the catalog, cart, and shopper together the way
//! the surrounding application does.

use catalog::{Catalog, Money, Product, ProductId};
use checkout::{CheckoutError, Confirmation, PlacementState, Shopper};

/// Seeds the catalog the surrounding application ships with.
fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(Product::electronics(
        "Laptop",
        Money::from_cents(99_999),
        "TechBrand",
        24,
    ));
    catalog.insert(Product::electronics(
        "Smartphone",
        Money::from_cents(69_999),
        "PhoneCo",
        12,
    ));
    catalog.insert(Product::electronics(
        "Headphones",
        Money::from_cents(14_999),
        "AudioTech",
        6,
    ));
    catalog.insert(Product::clothing(
        "T-Shirt",
        Money::from_cents(1999),
        "M",
        "Cotton",
    ));
    catalog.insert(Product::clothing(
        "Jeans",
        Money::from_cents(4999),
        "32",
        "Denim",
    ));
    catalog.insert(Product::clothing(
        "Hoodie",
        Money::from_cents(3999),
        "L",
        "Fleece",
    ));
    catalog.insert(Product::book(
        "Programming C++",
        Money::from_cents(3999),
        "Albert E. ",
        450,
    ));
    catalog.insert(Product::book(
        "Data Structures and Algorithms",
        Money::from_cents(2999),
        "Martha Williams",
        380,
    ));
    catalog
}

fn id(index: u32) -> ProductId {
    ProductId::new(index)
}

mod session_flow {
    use super::*;

    #[test]
    fn browse_fill_trim_and_place() {
        let catalog = seed_catalog();
        assert_eq!(catalog.product_count(), 8);

        let mut shopper = Shopper::new("Ada");

        // Laptop, a book, and a t-shirt.
        shopper.cart_mut().add(&catalog, id(0)).unwrap();
        shopper.cart_mut().add(&catalog, id(6)).unwrap();
        let total = shopper.cart_mut().add(&catalog, id(3)).unwrap();
        assert_eq!(total.cents(), 99_999 + 3999 + 1999);

        // Drop the t-shirt again.
        let removed = shopper.cart_mut().remove(2).unwrap();
        assert_eq!(removed, id(3));

        let snapshot = shopper.cart().snapshot(&catalog).unwrap();
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.total.cents(), 103_998);

        let receipt = shopper
            .place_order(&catalog, Confirmation::Confirmed)
            .unwrap();
        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.total.cents(), 103_998);

        assert!(shopper.cart().is_empty());
        assert_eq!(shopper.history().count(), 2);
        assert_eq!(shopper.history().most_recent().unwrap().product_id, id(6));

        let summary = shopper.history().summary(&catalog).unwrap();
        assert_eq!(summary.total_items, 2);
        assert!(summary.most_recent.starts_with("Book: Programming C++"));
    }

    #[test]
    fn declined_then_confirmed_with_the_same_cart() {
        let catalog = seed_catalog();
        let mut shopper = Shopper::new("Ada");
        shopper.cart_mut().add(&catalog, id(2)).unwrap();

        let result = shopper.place_order(&catalog, Confirmation::from_input("nope"));
        assert!(matches!(result, Err(CheckoutError::OrderCancelled)));
        assert_eq!(shopper.last_placement(), PlacementState::Cancelled);
        assert_eq!(shopper.cart().len(), 1);

        let receipt = shopper
            .place_order(&catalog, Confirmation::from_input("YES"))
            .unwrap();
        assert_eq!(receipt.item_count, 1);
        assert_eq!(shopper.last_placement(), PlacementState::Placed);
    }
}

mod live_pricing {
    use super::*;

    #[test]
    fn discount_applied_after_adding_changes_the_total() {
        let mut catalog = seed_catalog();
        let mut shopper = Shopper::new("Ada");

        shopper.cart_mut().add(&catalog, id(1)).unwrap();
        assert_eq!(shopper.cart().total(&catalog).unwrap().cents(), 69_999);

        // 10% off the smartphone while it sits in the cart.
        catalog.apply_discount(id(1), 10.0).unwrap();
        assert_eq!(shopper.cart().total(&catalog).unwrap().cents(), 62_999);

        let receipt = shopper
            .place_order(&catalog, Confirmation::Confirmed)
            .unwrap();
        assert_eq!(receipt.total.cents(), 62_999);
    }

    #[test]
    fn history_summary_reflects_current_prices() {
        let mut catalog = seed_catalog();
        let mut shopper = Shopper::new("Ada");
        shopper.cart_mut().add(&catalog, id(5)).unwrap();
        shopper
            .place_order(&catalog, Confirmation::Confirmed)
            .unwrap();

        catalog.set_price(id(5), Money::from_cents(2999)).unwrap();

        let summary = shopper.history().summary(&catalog).unwrap();
        assert!(summary.most_recent.contains("$29.99"));
    }
}

mod error_handling {
    use super::*;

    #[test]
    fn empty_cart_placement_is_reported_not_fatal() {
        let catalog = seed_catalog();
        let mut shopper = Shopper::new("Ada");

        for _ in 0..3 {
            let result = shopper.place_order(&catalog, Confirmation::Confirmed);
            assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        }
        assert_eq!(shopper.history().count(), 0);
    }

    #[test]
    fn bad_remove_index_is_reported_and_harmless() {
        let catalog = seed_catalog();
        let mut shopper = Shopper::new("Ada");
        shopper.cart_mut().add(&catalog, id(4)).unwrap();

        let result = shopper.cart_mut().remove(7);
        assert!(matches!(
            result,
            Err(CheckoutError::InvalidIndex { index: 7, len: 1 })
        ));
        assert_eq!(shopper.cart().len(), 1);
    }
}
