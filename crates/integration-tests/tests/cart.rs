//! Bag behavior over HTTP.

use aura_exotixx_integration_tests::{TestContext, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_add_merges_same_size() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    for _ in 0..2 {
        let resp = ctx
            .post(&client, "/cart/add", &[("product_id", "1"), ("size", "M")])
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/cart");
    }

    let body = ctx.page(&client, "/cart").await;
    assert_eq!(body.matches("Size M").count(), 1);
    assert!(body.contains("$598"));
    assert!(body.contains("<span class=\"badge\">2</span>"));
}

#[tokio::test]
async fn test_sizes_are_separate_lines() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    ctx.post(&client, "/cart/add", &[("product_id", "1"), ("size", "M")])
        .await;
    ctx.post(&client, "/cart/add", &[("product_id", "1"), ("size", "L")])
        .await;

    let body = ctx.page(&client, "/cart").await;
    assert!(body.contains("Size M"));
    assert!(body.contains("Size L"));
}

#[tokio::test]
async fn test_missing_size_uses_first() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    ctx.post(&client, "/cart/add", &[("product_id", "4"), ("size", "")])
        .await;

    let body = ctx.page(&client, "/cart").await;
    assert!(body.contains("Emerald Velvet Wrap"));
    assert!(body.contains("Size M"));
}

#[tokio::test]
async fn test_quantity_clamps_at_one_and_removal() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    ctx.post(&client, "/cart/add", &[("product_id", "1"), ("size", "M")])
        .await;
    ctx.post(&client, "/cart/add", &[("product_id", "1"), ("size", "M")])
        .await;

    let resp = ctx
        .post(
            &client,
            "/cart/update",
            &[("product_id", "1"), ("size", "M"), ("delta", "-5")],
        )
        .await;
    assert_eq!(location(&resp), "/cart");
    let body = ctx.page(&client, "/cart").await;
    assert!(body.contains("$299"));
    assert!(!body.contains("$598"));

    ctx.post(
        &client,
        "/cart/update",
        &[("product_id", "1"), ("size", "M"), ("delta", "2")],
    )
    .await;
    assert!(ctx.page(&client, "/cart").await.contains("$897"));

    ctx.post(&client, "/cart/remove", &[("product_id", "1"), ("size", "M")])
        .await;
    let body = ctx.page(&client, "/cart").await;
    assert!(body.contains("Your selection is empty."));
}

#[tokio::test]
async fn test_sold_out_and_unknown_products_are_rejected() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let resp = ctx
        .post(&client, "/cart/add", &[("product_id", "3"), ("size", "S")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = ctx
        .post(&client, "/cart/add", &[("product_id", "999"), ("size", "S")])
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = ctx
        .post(&client, "/cart/add", &[("product_id", "1"), ("size", "XXL")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(ctx.page(&client, "/cart").await.contains("Your selection is empty."));
}

#[tokio::test]
async fn test_add_returns_to_local_path_only() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let resp = ctx
        .post(
            &client,
            "/cart/add",
            &[("product_id", "2"), ("return_to", "/catalog?category=Cocktail")],
        )
        .await;
    assert_eq!(location(&resp), "/catalog?category=Cocktail");

    let resp = ctx
        .post(
            &client,
            "/cart/add",
            &[("product_id", "2"), ("return_to", "https://elsewhere.example")],
        )
        .await;
    assert_eq!(location(&resp), "/cart");
}

#[tokio::test]
async fn test_bags_are_per_visitor() {
    let ctx = TestContext::new().await;
    let alice = ctx.signed_in("alice@example.com").await;
    let bob = ctx.signed_in("bob@example.com").await;

    ctx.post(&alice, "/cart/add", &[("product_id", "1"), ("size", "S")])
        .await;

    assert!(ctx.page(&alice, "/cart").await.contains("Midnight Silk Evening Gown"));
    assert!(ctx.page(&bob, "/cart").await.contains("Your selection is empty."));
}
