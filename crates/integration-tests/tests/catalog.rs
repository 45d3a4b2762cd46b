//! Catalog browsing and product detail.

use aura_exotixx_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_catalog_lists_everything() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let body = ctx.page(&client, "/catalog").await;
    for name in [
        "Midnight Silk Evening Gown",
        "Champagne Cocktail Dress",
        "Rose Quartz Summer Midi",
        "Emerald Velvet Wrap",
    ] {
        assert!(body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_category_and_search_filter() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let body = ctx.page(&client, "/catalog?category=Evening&q=gown").await;
    assert!(body.contains("Midnight Silk Evening Gown"));
    assert!(!body.contains("Emerald Velvet Wrap"));
    assert!(!body.contains("Champagne Cocktail Dress"));

    let body = ctx.page(&client, "/catalog?q=VELVET").await;
    assert!(body.contains("Emerald Velvet Wrap"));
    assert!(!body.contains("Midnight Silk Evening Gown"));
}

#[tokio::test]
async fn test_empty_result() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let body = ctx.page(&client, "/catalog?category=Bridal").await;
    assert!(body.contains("No pieces match your selection."));
    assert!(!body.contains("Midnight Silk Evening Gown"));
}

#[tokio::test]
async fn test_home_features_available_products() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let body = ctx.page(&client, "/").await;
    assert!(body.contains("Midnight Silk Evening Gown"));
    assert!(body.contains("Emerald Velvet Wrap"));
    assert!(!body.contains("Rose Quartz Summer Midi"));
}

#[tokio::test]
async fn test_product_detail() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let body = ctx.page(&client, "/catalog/3").await;
    assert!(body.contains("Rose Quartz Summer Midi"));
    assert!(body.contains("Sold Out"));

    assert_eq!(
        ctx.get(&client, "/catalog/404").await.status(),
        StatusCode::NOT_FOUND
    );
}
