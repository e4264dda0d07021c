//! Duplicate-rejection tests against a real MongoDB.
//!
//! These exercise the unique indexes end to end: the friendly 409
//! pre-check branch and the E11000 classification behind it. They need
//! a running MongoDB (MONGO_TEST_URI, default mongodb://127.0.0.1:27017)
//! and are ignored by default.
//! Run: cargo test --test store -- --ignored

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Database};
use tower::ServiceExt;

use fadebook::models::{Appointment, Barber, ROLE_BARBER};
use fadebook::{AppState, Config, api, db, storage::ImageStore};

fn mongo_uri() -> String {
    std::env::var("MONGO_TEST_URI").unwrap_or_else(|_| "mongodb://127.0.0.1:27017".into())
}

/// Fresh database per test so runs cannot collide
async fn test_db() -> Database {
    let client = Client::with_uri_str(mongo_uri()).await.expect("mongo client");
    let db = client.database(&format!("fadebook_test_{}", ObjectId::new().to_hex()));
    db::ensure_indexes(&db).await.expect("index bootstrap");
    db
}

fn test_config() -> Config {
    Config {
        mongo_uri: mongo_uri(),
        mongo_db: String::new(),
        http_port: 0,
        bucket_name: "fade-images".into(),
        bucket_region: "eu-west-2".into(),
        access_key: "test".into(),
        secret_access_key: "test".into(),
        jwt_secret: "store-test-secret".into(),
        cors_origin: "http://localhost:3000".into(),
        cookie_secure: true,
    }
}

fn test_app(db: Database) -> Router {
    let config = test_config();
    let state = AppState {
        db,
        images: ImageStore::new(&config),
        jwt_secret: config.jwt_secret.clone(),
        cors_origin: config.cors_origin.clone(),
        cookie_secure: config.cookie_secure,
    };
    api::router(state)
}

fn sample_barber(f_name: &str, l_name: &str, email: &str) -> Barber {
    Barber {
        id: ObjectId::new(),
        f_name: f_name.into(),
        l_name: l_name.into(),
        email: email.into(),
        password: "$2b$10$hash".into(),
        image_url: "https://fade-images.s3.eu-west-2.amazonaws.com/key".into(),
        role: ROLE_BARBER.into(),
        work_weekends: None,
        opening_hour: None,
        closing_hour: None,
    }
}

async fn post_json(app: Router, path: &str, body: &serde_json::Value) -> axum::response::Response {
    app.oneshot(
        Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[ignore]
async fn duplicate_barber_name_is_a_unique_index_violation() {
    let db = test_db().await;

    db::barbers::insert(&db, &sample_barber("John", "Doe", "john@example.com"))
        .await
        .expect("first insert");

    // Same name, different email: the fName+lName index rejects it
    let err = db::barbers::insert(&db, &sample_barber("John", "Doe", "john2@example.com"))
        .await
        .expect_err("second insert must fail");
    assert!(db::is_duplicate_key(&err));

    // A different name is fine
    db::barbers::insert(&db, &sample_barber("Jane", "Doe", "jane@example.com"))
        .await
        .expect("different name inserts");

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn duplicate_slot_is_a_unique_index_violation() {
    let db = test_db().await;

    let booking = |id| Appointment {
        id,
        barber_id: "abc".into(),
        customer_f_name: "Sam".into(),
        customer_l_name: "Smith".into(),
        customer_email: "sam@example.com".into(),
        customer_phone: "555-0100".into(),
        service_id: "def".into(),
        service_title: "Haircut".into(),
        service_length: "30".into(),
        service_price: 20.0,
        date: "2026-09-01".into(),
        time: 900,
    };

    db::appointments::insert(&db, &booking(ObjectId::new()))
        .await
        .expect("first booking");

    let err = db::appointments::insert(&db, &booking(ObjectId::new()))
        .await
        .expect_err("same slot must fail");
    assert!(db::is_duplicate_key(&err));

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn duplicate_service_title_conflicts_per_barber() {
    let db = test_db().await;

    let request = |barber_id: &str| {
        serde_json::json!({
            "title": "Haircut",
            "description": "A classic cut",
            "price": 20.0,
            "barberID": barber_id,
        })
    };

    let response = post_json(test_app(db.clone()), "/service", &request("barber-a")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(test_app(db.clone()), "/service", &request("barber-a")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["message"], "A service with the same title already exists.");

    // Uniqueness is scoped to the barber; another barber can reuse the title
    let response = post_json(test_app(db.clone()), "/service", &request("barber-b")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn double_booking_a_slot_conflicts() {
    let db = test_db().await;

    let request = serde_json::json!({
        "barberID": "abc",
        "customerFName": "Sam",
        "customerLName": "Smith",
        "customerEmail": "sam@example.com",
        "customerPhone": "555-0100",
        "serviceID": "def",
        "serviceTitle": "Haircut",
        "serviceLength": "30",
        "servicePrice": 20.0,
        "date": "2026-09-01",
        "time": 900,
    });

    let response = post_json(test_app(db.clone()), "/appointments", &request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Appointment booked successfully.");

    let response = post_json(test_app(db.clone()), "/appointments", &request).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["message"], "This time slot is already booked.");

    // A different slot with the same barber books fine
    let mut other = request.clone();
    other["time"] = serde_json::json!(930);
    let response = post_json(test_app(db.clone()), "/appointments", &other).await;
    assert_eq!(response.status(), StatusCode::OK);

    db.drop().await.unwrap();
}
