use std::fs;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use meal_planner_rs::datasets::CsvDirectoryProvider;
use meal_planner_rs::server::router;
use meal_planner_rs::MealPlanService;

fn dataset_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let tables = [
        ("breakfast.csv", "meal_name,calories\nIdli Sambar,450\n"),
        ("lunch.csv", "meal_name,calories\nPaneer Thali,650\n"),
        ("dinner.csv", "meal_name,calories\nVeg Biryani,700\n"),
        ("nvbreakfast.csv", "meal_name,calories\nMasala Omelette,450\n"),
        ("nvlunch.csv", "meal_name,calories\nChicken Curry,650\n"),
        ("nvdinner.csv", "meal_name,calories\nFish Fry,700\n"),
    ];
    for (name, content) in tables {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn app(dir: &TempDir) -> axum::Router {
    router(MealPlanService::new(Arc::new(CsvDirectoryProvider::new(
        dir.path(),
    ))))
}

async fn post_json(app: axum::Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate_meals")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn reference_body() -> Value {
    json!({
        "age": 30,
        "weight": 70,
        "height": 175,
        "gender": "male",
        "activity_level": "sedentary",
        "weight_goal": "maintain"
    })
}

#[tokio::test]
async fn test_generate_meals_success() {
    let dir = dataset_dir();
    let (status, body) = post_json(app(&dir), reference_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let per_day = body["calories"]["calories-per-day"].as_f64().unwrap();
    assert!((per_day - 2042.214).abs() < 1e-9);
    assert!(body["calories"]["breakfast-calories-per-day"].is_number());
    assert!(body["calories"]["lunch-calories-per-day"].is_number());
    assert!(body["calories"]["dinner-calories-per-day"].is_number());
    assert_eq!(body["veg"]["breakfast"], json!(["Idli Sambar"]));
    assert_eq!(body["veg"]["lunch"], json!(["Paneer Thali"]));
    assert_eq!(body["non_veg"]["dinner"], json!(["Fish Fry"]));
}

#[tokio::test]
async fn test_numeric_strings_accepted() {
    let dir = dataset_dir();
    let mut request = reference_body();
    request["age"] = json!("30");
    request["weight"] = json!("70");
    request["height"] = json!("175");

    let (status, body) = post_json(app(&dir), request.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["veg"]["dinner"], json!(["Veg Biryani"]));
}

#[tokio::test]
async fn test_unrecognized_goal_falls_back_to_maintain() {
    let dir = dataset_dir();
    let (status, maintain) = post_json(app(&dir), reference_body().to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let expected = maintain["calories"]["calories-per-day"].as_f64().unwrap();

    for goal in [json!("bulk"), json!("LOSS"), json!(5), Value::Null] {
        let mut request = reference_body();
        request["weight_goal"] = goal.clone();

        let (status, body) = post_json(app(&dir), request.to_string()).await;
        assert_eq!(status, StatusCode::OK, "goal {}", goal);
        assert_eq!(
            body["calories"]["calories-per-day"].as_f64().unwrap(),
            expected,
            "goal {}",
            goal
        );
        assert_eq!(body["veg"], maintain["veg"]);
    }
}

#[tokio::test]
async fn test_loss_goal_shifts_budget() {
    let dir = dataset_dir();
    let mut request = reference_body();
    request["weight_goal"] = json!("loss");

    let (status, body) = post_json(app(&dir), request.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let per_day = body["calories"]["calories-per-day"].as_f64().unwrap();
    assert!((per_day - 1842.214).abs() < 1e-9);
}

#[tokio::test]
async fn test_invalid_gender_is_client_error() {
    let dir = dataset_dir();
    let mut request = reference_body();
    request["gender"] = json!("other");

    let (status, body) = post_json(app(&dir), request.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("gender must be male or female"));
}

#[tokio::test]
async fn test_missing_field_is_client_error() {
    let dir = dataset_dir();
    let mut request = reference_body();
    request.as_object_mut().unwrap().remove("height");

    let (status, body) = post_json(app(&dir), request.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("height"));
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let dir = dataset_dir();
    let (status, body) = post_json(app(&dir), "{\"age\": ".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_dataset_failure_returns_no_partial_plan() {
    let dir = dataset_dir();
    fs::remove_file(dir.path().join("nvdinner.csv")).unwrap();

    let (status, body) = post_json(app(&dir), reference_body().to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("calories").is_none());
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Dataset unavailable"));
}

#[tokio::test]
async fn test_health() {
    let dir = dataset_dir();
    let response = app(&dir)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
