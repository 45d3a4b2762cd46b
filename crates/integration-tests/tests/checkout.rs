//! Simulated checkout and contact inquiries.

use aura_exotixx_integration_tests::{TestContext, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_payment_with_empty_bag_redirects_to_catalog() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    assert_eq!(location(&ctx.get(&client, "/payment").await), "/catalog");
    let resp = ctx.post(&client, "/payment", &[("method", "upi")]).await;
    assert_eq!(location(&resp), "/catalog");
}

#[tokio::test]
async fn test_payment_page_shows_total_and_upi_id() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;
    ctx.post(&client, "/cart/add", &[("product_id", "2"), ("size", "M")])
        .await;
    ctx.post(&client, "/cart/add", &[("product_id", "4"), ("size", "L")])
        .await;

    let body = ctx.page(&client, "/payment").await;
    assert!(body.contains("9099090334@fam"));
    assert!(body.contains("$409"));

    let body = ctx.page(&client, "/payment?method=cash").await;
    assert!(body.contains("Pay securely in cash at your doorstep."));
    assert!(!body.contains("9099090334@fam"));
}

#[tokio::test]
async fn test_place_order_empties_bag() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;
    ctx.post(&client, "/cart/add", &[("product_id", "1"), ("size", "M")])
        .await;

    assert!(ctx.session_holds("aura_exotixx_cart").await);

    let resp = ctx.post(&client, "/payment", &[("method", "card")]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/?order=placed");
    assert!(!ctx.session_holds("aura_exotixx_cart").await);
    assert!(ctx.session_holds("aura_exotixx_user").await);

    let body = ctx.page(&client, "/?order=placed").await;
    assert!(body.contains("Order placed."));
    assert!(!body.contains("class=\"badge\""));
    assert!(ctx.page(&client, "/cart").await.contains("Your selection is empty."));
}

#[tokio::test]
async fn test_contact_inquiry() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let resp = ctx
        .post(
            &client,
            "/contact",
            &[("first_name", "Ada"), ("email", "bad"), ("message", "")],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.text().await.unwrap_or_default();
    assert!(body.contains("This field is required."));
    assert!(body.contains("value=\"Ada\""));

    let resp = ctx
        .post(
            &client,
            "/contact",
            &[
                ("first_name", "Ada"),
                ("last_name", "L"),
                ("email", "ada@example.com"),
                ("message", "Do you ship to Milan?"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/contact?sent=1");
    assert!(ctx.page(&client, "/contact?sent=1").await.contains("We will be in touch"));
}
