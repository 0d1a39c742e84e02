use axum::{body::Body, http::StatusCode};
use serde_json::json;

mod helpers;

#[tokio::test]
async fn test_contact_submission_is_listed() -> anyhow::Result<()> {
    let app = helpers::setup_test_app();

    let (status, body) = app
        .post_json(
            "/api/contact",
            json!({"name": "A", "email": "a@b.com", "service": "website", "message": "hi"}),
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your message! We'll get back to you within 24 hours."
    );
    let id = body["submissionId"].as_str().unwrap().to_owned();

    let (status, body) = app.get_json("/api/submissions").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let submission = &body["submissions"][0];
    assert_eq!(submission["id"], id.as_str());
    assert_eq!(submission["type"], "contact");
    assert_eq!(submission["status"], "new");
    assert_eq!(
        submission["data"],
        json!({"name": "A", "email": "a@b.com", "service": "website", "message": "hi"})
    );
    assert!(submission["submittedAt"].as_str().is_some());

    Ok(())
}

#[tokio::test]
async fn test_consultation_submission() -> anyhow::Result<()> {
    let app = helpers::setup_test_app();

    let (status, body) = app
        .post_json(
            "/api/consultation",
            json!({
                "name": "Jane",
                "email": "jane@acme.test",
                "phone": "+1 555 0100",
                "company": "",
                "projectType": "ecommerce",
                "consultationType": "video",
                "message": "New shop",
                "newsletter": true,
            }),
        )
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Consultation request received! We'll contact you within 24 hours to schedule your free session."
    );

    let (_, body) = app.get_json("/api/submissions").await?;
    let data = &body["submissions"][0]["data"];
    assert_eq!(body["submissions"][0]["type"], "consultation");
    assert_eq!(data["projectType"], "ecommerce");
    assert_eq!(data["consultationType"], "video");
    assert!(data.get("company").is_none());
    assert!(data.get("preferredTime").is_none());
    assert!(data.get("newsletter").is_none());

    Ok(())
}

#[tokio::test]
async fn test_contact_missing_fields() -> anyhow::Result<()> {
    let app = helpers::setup_test_app();

    let (status, body) = app
        .post_json(
            "/api/contact",
            json!({"name": "", "email": "not-an-email", "service": "website"}),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Please fill in all required fields correctly."
    );
    assert_eq!(
        body["errors"],
        json!([
            {"field": "email", "code": "email", "message": "Valid email is required"},
            {"field": "message", "code": "length", "message": "Message is required"},
            {"field": "name", "code": "length", "message": "Name is required"},
        ])
    );
    assert!(app.store.is_empty().await);

    Ok(())
}

#[tokio::test]
async fn test_consultation_requires_phone_and_project_type() -> anyhow::Result<()> {
    let app = helpers::setup_test_app();

    let (status, body) = app
        .post_json(
            "/api/consultation",
            json!({"name": "Jane", "email": "jane@acme.test", "message": "hi"}),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let fields = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(fields, vec!["phone", "projectType"]);
    assert_eq!(body["errors"][0]["message"], "Phone number is required");
    assert_eq!(body["errors"][1]["message"], "Project type is required");
    assert!(app.store.is_empty().await);

    Ok(())
}

#[tokio::test]
async fn test_wrong_field_type() -> anyhow::Result<()> {
    let app = helpers::setup_test_app();

    let (status, body) = app
        .post_json(
            "/api/contact",
            json!({"name": 42, "email": "a@b.com", "service": "website", "message": "hi"}),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([{"field": "name", "code": "invalid_type", "message": "Expected string, received number"}])
    );

    Ok(())
}

#[tokio::test]
async fn test_null_required_field() -> anyhow::Result<()> {
    let app = helpers::setup_test_app();

    let (status, body) = app
        .post_json(
            "/api/contact",
            json!({"name": null, "email": "a@b.com", "company": null, "service": "website", "message": "hi"}),
        )
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([{"field": "name", "code": "invalid_type", "message": "Expected string, received null"}])
    );
    assert!(app.store.is_empty().await);

    Ok(())
}

#[tokio::test]
async fn test_body_must_be_a_json_object() -> anyhow::Result<()> {
    let app = helpers::setup_test_app();

    let (status, body) = app.post_json("/api/contact", json!(["A"])).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "body");
    assert_eq!(body["errors"][0]["code"], "invalid_type");

    let (status, bytes) = app
        .send("POST", "/api/contact", Some(Body::from("{not json")))
        .await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "body");
    assert_eq!(body["errors"][0]["code"], "invalid_json");

    assert!(app.store.is_empty().await);

    Ok(())
}
