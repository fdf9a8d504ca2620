use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn complete_submission_is_acknowledged() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::CONTACT,
            &json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Engines",
                "message": "Enjoyed the churn write-up."
            }),
        )
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(
        res.body,
        json!({ "success": true, "message": "Message sent successfully!" })
    );
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::CONTACT,
            &json!({ "name": "Ada", "email": "ada@example.com", "subject": "Hi" }),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    assert_eq!(res.body["message"], "All fields are required");
}

#[tokio::test]
async fn blank_field_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(
            routes::CONTACT,
            &json!({ "name": "   ", "email": "ada@example.com", "subject": "Hi", "message": "Hello" }),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["message"], "All fields are required");
}

#[tokio::test]
async fn submission_does_not_touch_content() {
    let app = TestApp::spawn().await;
    let before = app.get(routes::BLOG).await;

    app.post(
        routes::CONTACT,
        &json!({ "name": "A", "email": "a@b.c", "subject": "S", "message": "M" }),
    )
    .await;

    let after = app.get(routes::BLOG).await;
    assert_eq!(before.body, after.body);
}
