use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn first_read_creates_defaults() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app.get_with_token(routes::SETTINGS, &token).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["site_name"], "Service Marketplace");
    assert_eq!(res.body["maintenance_mode"], false);
    assert!(res.body["contact_email"].is_null());
}

#[tokio::test]
async fn patch_distinguishes_null_from_absent() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let set = app
        .patch_with_token(
            routes::SETTINGS,
            &json!({"contact_phone": "555-0100", "address": "1 Main St"}),
            &token,
        )
        .await;
    assert_eq!(set.status, 200, "{}", set.text);
    assert_eq!(set.body["contact_phone"], "555-0100");

    let cleared = app
        .patch_with_token(
            routes::SETTINGS,
            &json!({"contact_phone": null, "maintenance_mode": true}),
            &token,
        )
        .await;
    assert_eq!(cleared.status, 200, "{}", cleared.text);
    assert!(cleared.body["contact_phone"].is_null());
    assert_eq!(cleared.body["address"], "1 Main St");
    assert_eq!(cleared.body["maintenance_mode"], true);
}

#[tokio::test]
async fn patch_validates_site_name() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .patch_with_token(routes::SETTINGS, &json!({"site_name": "   "}), &token)
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn manager_can_read_but_not_edit() {
    let app = TestApp::spawn().await;
    let token = app.token_with_role("manager@example.com", "manager").await;

    let read = app.get_with_token(routes::SETTINGS, &token).await;
    assert_eq!(read.status, 200);

    let edit = app
        .patch_with_token(routes::SETTINGS, &json!({"maintenance_mode": true}), &token)
        .await;
    assert_eq!(edit.status, 403);
}
