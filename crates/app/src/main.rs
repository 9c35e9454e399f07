//! Storefront demo entry point.
//!
//! Wires the full pipeline for one scripted session: seed the catalog,
//! fill and trim the cart, place the order with the configured
//! confirmation decision, submit it to the processor, and process it.
//! The confirmation is resolved from configuration up front — the core
//! never reads input.

use catalog::{Catalog, Money, Product};
use checkout::Shopper;
use fulfillment::{OrderProcessor, PendingOrder};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;

use config::Config;

/// Seeds the fixed product catalog.
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

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let catalog = seed_catalog();
    tracing::info!(products = catalog.product_count(), "catalog loaded");

    let mut shopper = Shopper::new(config.shopper.clone());
    tracing::info!(customer = %shopper.name(), id = %shopper.id(), "session started");

    // Browse the catalog.
    for (id, product) in catalog.iter() {
        tracing::info!(%id, "{product}");
    }

    // Fill the cart: a laptop, a book, and a t-shirt.
    let ids: Vec<_> = catalog.iter().map(|(id, _)| id).collect();
    shopper
        .cart_mut()
        .add(&catalog, ids[0])
        .expect("seeded product");
    shopper
        .cart_mut()
        .add(&catalog, ids[6])
        .expect("seeded product");
    shopper
        .cart_mut()
        .add(&catalog, ids[3])
        .expect("seeded product");

    let snapshot = shopper.cart().snapshot(&catalog).expect("cart snapshot");
    for (position, line) in snapshot.lines.iter().enumerate() {
        tracing::info!(
            "{}. {} ({}) {}",
            position + 1,
            line.name,
            line.category,
            line.unit_price
        );
    }
    tracing::info!(total = %snapshot.total, "cart total");

    // Second thoughts about the t-shirt.
    shopper.cart_mut().remove(2).expect("index in bounds");
    tracing::info!(items = shopper.cart().len(), "cart trimmed");

    let mut processor = OrderProcessor::simulated();

    match shopper.place_order(&catalog, config.confirm) {
        Ok(receipt) => {
            let depth = processor.submit(PendingOrder::new(receipt));
            tracing::info!(depth, "order queued for fulfillment");

            let report = processor.process_next().expect("one pending order");
            for step in &report.steps {
                tracing::info!(step = %step.step, reference = %step.reference, "step completed");
            }
        }
        Err(err) => tracing::warn!(%err, "order was not placed"),
    }

    match shopper.history().summary(&catalog) {
        Ok(summary) => tracing::info!(
            last = %summary.most_recent,
            total_items = summary.total_items,
            "order history"
        ),
        Err(err) => tracing::info!(%err, "no order history"),
    }
}
