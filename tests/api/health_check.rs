use crate::helpers::App;

#[tokio::test]
async fn health_check_works() {
    let app = App::new().await;

    let response = app.get_health_check().await;

    assert!(response.status().is_success());

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}
