//! End-to-end shopper session against the in-memory backend.

use furniro_content::{ContentError, MemoryContent};
use furniro_core::catalog::Listing;
use furniro_core::notice::{ORDER_FAILED, ORDER_PLACED};
use furniro_core::validation::BillingDetails;
use furniro_core::StoreOutcome;
use furniro_storefront::commands::{cart, catalog, checkout, comparison, wishlist};
use furniro_storefront::state::{ConfigState, DiscountFlag};
use furniro_storefront::Storefront;

fn storefront(discount: DiscountFlag) -> Storefront<MemoryContent> {
    let content = MemoryContent::with_sample_catalog().unwrap();
    Storefront::new(ConfigState::default(), discount, content)
}

fn billing() -> BillingDetails {
    BillingDetails {
        first_name: "Bilal".to_string(),
        last_name: "Ahmed".to_string(),
        address: "4 Mall Road".to_string(),
        city: "Karachi".to_string(),
        zip_code: "74200".to_string(),
        phone: "923001234567".to_string(),
        email: "bilal@example.com".to_string(),
    }
}

#[tokio::test]
async fn test_browse_cart_and_checkout() {
    let sf = storefront(DiscountFlag::in_memory());

    // Home page
    let featured = catalog::load_featured(&sf.content, &sf.config).await;
    assert_eq!(featured.result_count(), 8);

    // Search, then open a product
    let results = catalog::search_products(&sf.content, "sofa").await;
    let sofa = results.products()[1].clone();
    assert_eq!(sofa.title, "Asgaard Sofa");

    let product = catalog::load_product(&sf.content, &sofa.id).await.unwrap();
    let related = catalog::load_related(&sf.content, &sf.config, &product.id).await;
    assert_eq!(related.result_count(), 4);

    // Cart: the same product twice, plus a related one
    cart::add_to_cart(&sf.store, product.clone()).unwrap();
    cart::add_to_cart(&sf.store, product.clone()).unwrap();
    let chair = related.products()[0].clone();
    cart::add_to_cart(&sf.store, chair.clone()).unwrap();

    let current = cart::get_cart(&sf.store);
    assert_eq!(current.items.len(), 2);
    assert_eq!(current.totals.total_quantity, 3);

    // Wishlist and comparison are independent of the cart
    wishlist::like_product(&sf.store, product.clone());
    comparison::add_to_comparison(&sf.store, product.clone());
    comparison::add_to_comparison(&sf.store, chair.clone());
    let third = related.products()[1].clone();
    assert_eq!(
        comparison::add_to_comparison(&sf.store, third).outcome,
        StoreOutcome::RejectedAtCap { max: 2 }
    );

    cart::remove_from_cart(&sf.store, &chair.id);
    assert_eq!(comparison::get_comparison(&sf.store).len(), 2);
    assert_eq!(wishlist::get_wishlist(&sf.store).len(), 1);

    // Payment amount matches the cart
    let request = checkout::prepare_payment(&sf.store, &sf.config).unwrap();
    assert_eq!(request.total(), cart::get_cart(&sf.store).totals.total);

    // Checkout
    checkout::apply_discount(&sf.discount, "WELCOME10").unwrap();
    let response = checkout::place_order(&sf.store, &sf.discount, &sf.content, billing(), true)
        .await
        .unwrap();

    assert!(response.is_placed());
    assert_eq!(response.notices.last().unwrap().message, ORDER_PLACED);
    assert!(checkout::get_discount(&sf.discount).is_none());

    let orders = sf.content.orders().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].document["_type"], "order");
    assert_eq!(orders[0].document["status"], "pending");
    assert_eq!(orders[0].document["cartItems"][0]["product"]["_ref"], sofa.id.as_str());
}

#[tokio::test]
async fn test_outage_keeps_session_intact() {
    let path = std::env::temp_dir()
        .join(format!("furniro-session-{}", uuid::Uuid::new_v4()))
        .join("applied-discount.json");

    let sf = storefront(DiscountFlag::open(path.clone()));
    let product = catalog::load_product(&sf.content, "b1f0c2a4-0003-4d0e-9a61-lolito")
        .await
        .unwrap();
    cart::add_to_cart(&sf.store, product).unwrap();
    checkout::apply_discount(&sf.discount, "welcome10").unwrap();

    sf.content
        .fail_with(ContentError::Network("connection reset".into()))
        .await;

    // Listings degrade to a retryable failure
    let shop = catalog::load_shop(&sf.content).await;
    assert!(matches!(shop, Listing::Failed { retryable: true, .. }));

    // Order submission fails without touching the cart or the flag
    let response = checkout::place_order(&sf.store, &sf.discount, &sf.content, billing(), true)
        .await
        .unwrap();
    assert!(!response.is_placed());
    assert_eq!(response.notices.last().unwrap().message, ORDER_FAILED);
    assert_eq!(cart::get_cart(&sf.store).items.len(), 1);

    // The flag survives a restart
    let reopened = DiscountFlag::open(path.clone());
    assert_eq!(reopened.current().unwrap().code, "WELCOME10");

    // Retry after recovery succeeds and removes the file
    sf.content.recover().await;
    let response = checkout::place_order(&sf.store, &sf.discount, &sf.content, billing(), true)
        .await
        .unwrap();
    assert!(response.is_placed());
    assert!(!path.exists());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
