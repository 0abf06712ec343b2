use reqwest::StatusCode;
use serde_json::json;

use impacto::store::Lead;

use crate::helpers::App;

#[tokio::test]
async fn create_lead_returns_201_and_the_stored_record_for_valid_data() {
    let app = App::new().await;
    let body = json!({ "name": "Ana", "email": "ana@example.com" });

    let response = app.post_leads(&body).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response.json::<Lead>().await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Ana");
    assert_eq!(created.email, "ana@example.com");

    let saved = app.store.list_all();
    assert_eq!(saved, vec![created]);
}

#[tokio::test]
async fn leads_are_listed_in_creation_order_with_sequential_ids() {
    let app = App::new().await;

    let first = app
        .post_leads(&json!({ "name": "Ana", "email": "ana@x.com" }))
        .await
        .json::<Lead>()
        .await
        .unwrap();
    let second = app
        .post_leads(&json!({ "name": "Bob", "email": "bob@x.com" }))
        .await
        .json::<Lead>()
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let response = app.get_leads().await;

    assert_eq!(response.status(), StatusCode::OK);

    let listed = response.json::<Vec<Lead>>().await.unwrap();
    assert_eq!(listed, vec![first, second]);
}

#[tokio::test]
async fn listing_leads_twice_without_writes_returns_identical_sequences() {
    let app = App::new().await;
    app.post_leads(&json!({ "name": "Ana", "email": "ana@example.com" }))
        .await;

    let first = app.get_leads().await.json::<Vec<Lead>>().await.unwrap();
    let second = app.get_leads().await.json::<Vec<Lead>>().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn listing_an_untouched_store_returns_an_empty_sequence() {
    let app = App::new().await;

    let response = app.get_leads().await;

    assert_eq!(response.status(), StatusCode::OK);

    let listed = response.json::<Vec<Lead>>().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn create_lead_returns_422_when_attributes_are_missing() {
    let app = App::new().await;
    let test_cases = [
        (json!({ "email": "ana@example.com" }), "name"),
        (json!({ "name": "Ana" }), "email"),
    ];

    for (body, missing_field) in test_cases {
        let response = app.post_leads(&body).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let detail = response.text().await.unwrap();
        assert!(
            detail.contains(missing_field),
            "rejection for a body without {} did not name the field: {}",
            missing_field,
            detail,
        );
    }
}

#[tokio::test]
async fn create_lead_returns_422_when_fields_are_present_but_invalid() {
    let app = App::new().await;
    let test_cases = [
        json!({ "name": "Ana", "email": "" }),
        json!({ "name": "", "email": "ana@example.com" }),
        json!({ "name": "Bob", "email": "not-an-email" }),
    ];

    for body in test_cases {
        let response = app.post_leads(&body).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn rejected_leads_are_not_appended_to_the_store() {
    let app = App::new().await;

    let response = app
        .post_leads(&json!({ "name": "Bob", "email": "not-an-email" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let detail = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(
        detail,
        json!({ "error": "not-an-email is not a valid email address" })
    );

    assert!(app.store.list_all().is_empty());

    let listed = app.get_leads().await.json::<Vec<Lead>>().await.unwrap();
    assert!(listed.is_empty());
}
