//! Login gating, admin detection and logout.

use aura_exotixx_integration_tests::{ADMIN, TestContext, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_endpoints() {
    let ctx = TestContext::new().await;
    let client = ctx.visitor();
    assert_eq!(ctx.page(&client, "/health").await, "ok");
    assert_eq!(
        ctx.get(&client, "/health/ready").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_pages_require_login() {
    let ctx = TestContext::new().await;
    let client = ctx.visitor();

    for path in ["/", "/catalog", "/catalog/1", "/cart", "/payment", "/contact", "/admin"] {
        let resp = ctx.get(&client, path).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "GET {path}");
        assert_eq!(location(&resp), "/login", "GET {path}");
    }

    let resp = ctx
        .post(&client, "/cart/add", &[("product_id", "1"), ("size", "M")])
        .await;
    assert_eq!(location(&resp), "/login");

    let body = ctx.page(&client, "/login").await;
    assert!(body.contains("Sign in with your email"));
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let ctx = TestContext::new().await;
    let client = ctx.visitor();

    let resp = ctx.post(&client, "/login", &[("email", "not-an-email")]).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.text().await.unwrap_or_default();
    assert!(body.contains("email must contain an @ symbol"));

    let resp = ctx.get(&client, "/").await;
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn test_guest_login() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let body = ctx.page(&client, "/").await;
    assert!(body.contains("Guest Account"));
    assert!(!body.contains("guest@example.com"));
    assert!(!body.contains("href=\"/admin\""));

    // Signed-in visitors skip the login page.
    let resp = ctx.get(&client, "/login").await;
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn test_guest_cannot_open_admin() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;

    let resp = ctx.get(&client, "/admin").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    let resp = ctx
        .post(&client, "/admin/products/1/delete", &[])
        .await;
    assert_eq!(location(&resp), "/");
    assert!(ctx.page(&client, "/catalog").await.contains("Midnight Silk Evening Gown"));
}

#[tokio::test]
async fn test_admin_email_is_case_insensitive() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in(&ADMIN.to_uppercase()).await;

    let body = ctx.page(&client, "/").await;
    assert!(body.contains("Authority Console"));
    assert!(body.contains("href=\"/admin\""));

    let body = ctx.page(&client, "/admin").await;
    assert!(body.contains("Inventory"));
}

#[tokio::test]
async fn test_logout_keeps_bag() {
    let ctx = TestContext::new().await;
    let client = ctx.signed_in("guest@example.com").await;
    ctx.post(&client, "/cart/add", &[("product_id", "2"), ("size", "S")])
        .await;

    let resp = ctx.post(&client, "/logout", &[]).await;
    assert_eq!(location(&resp), "/login");
    assert_eq!(location(&ctx.get(&client, "/cart").await), "/login");

    ctx.post(&client, "/login", &[("email", "guest@example.com")])
        .await;
    let body = ctx.page(&client, "/cart").await;
    assert!(body.contains("Champagne Cocktail Dress"));
}

#[tokio::test]
async fn test_unknown_paths_redirect_home() {
    let ctx = TestContext::new().await;
    let client = ctx.visitor();
    let resp = ctx.get(&client, "/nowhere/at/all").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn test_response_headers() {
    let ctx = TestContext::new().await;
    let client = ctx.visitor();
    let resp = ctx.get(&client, "/login").await;

    let headers = resp.headers();
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));

    let resp = client
        .get(ctx.url("/login"))
        .header("x-request-id", "edge-1234")
        .send()
        .await
        .unwrap_or_else(|e| panic!("GET failed: {e}"));
    assert_eq!(resp.headers()["x-request-id"], "edge-1234");
}
