use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use customer_lead_api::models::config::DEFAULT_MAX_PAYLOAD_BYTES;
use customer_lead_api::repository::{ContactImageReader, DieselRepository};
use customer_lead_api::domain::types::ContactId;
use customer_lead_api::routes;
use serde_json::{Value, json};

mod common;

const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .configure(|cfg| routes::extractor_config(cfg, DEFAULT_MAX_PAYLOAD_BYTES))
                .configure(routes::configure)
                .default_service(web::to(routes::not_found))
                .app_data(web::Data::new($repo)),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn image_body(data: &str) -> Value {
    json!({"imageData": data, "fileName": "pixel.png", "contentType": "image/png"})
}

fn batch_body(n: usize) -> Value {
    Value::Array((0..n).map(|_| image_body(PNG_BASE64)).collect())
}

#[actix_web::test]
async fn test_health_reports_healthy() {
    let test_db = common::TestDb::new("test_health_reports_healthy.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let (status, body) = send!(app, test::TestRequest::get().uri("/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_contact_lifecycle() {
    let test_db = common::TestDb::new("test_contact_lifecycle.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "+441234567",
                "type": 1
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap().to_string();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Contact created successfully");
    assert_eq!(body["data"]["type"], 1);
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/contacts/{id}"));

    let (status, body) = send!(app, test::TestRequest::get().uri(&location));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ada Lovelace");
    assert_eq!(body["data"]["imageCount"], 0);
    assert_eq!(body["data"]["images"], json!([]));

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&location)
            .set_json(json!({"name": "Ada King", "type": 0}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ada King");
    assert_eq!(body["data"]["email"], Value::Null);
    assert_eq!(body["data"]["type"], 1);

    let (status, body) = send!(app, test::TestRequest::delete().uri(&location));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact deleted successfully");
    assert_eq!(body["data"], Value::Null);

    let (status, body) = send!(app, test::TestRequest::get().uri(&location));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Contact with ID {id} not found"));
}

#[actix_web::test]
async fn test_name_length_boundary() {
    let test_db = common::TestDb::new("test_name_length_boundary.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "a".repeat(100), "type": 0}))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "a".repeat(101), "type": 0}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"], json!(["Name cannot exceed 100 characters"]));
}

#[actix_web::test]
async fn test_create_reports_every_violation() {
    let test_db = common::TestDb::new("test_create_reports_every_violation.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": " ", "email": "bad", "phone": "abc", "type": 3}))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            "Name is required",
            "Invalid email format",
            "Invalid phone number format",
            "Invalid contact type"
        ])
    );
}

#[actix_web::test]
async fn test_list_contacts_counts_images() {
    let test_db = common::TestDb::new("test_list_contacts_counts_images.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    for name in ["Alice", "Bob"] {
        send!(
            app,
            test::TestRequest::post()
                .uri("/api/contacts")
                .set_json(json!({"name": name, "type": 0}))
        );
    }
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images/batch")
            .set_json(batch_body(3))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/contacts"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contacts retrieved successfully");
    assert_eq!(body["data"][0]["imageCount"], 3);
    assert_eq!(body["data"][1]["imageCount"], 0);
}

#[actix_web::test]
async fn test_image_round_trip() {
    let test_db = common::TestDb::new("test_image_round_trip.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "Alice", "type": 0}))
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images")
            .set_json(image_body(PNG_BASE64))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap().to_string();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Image uploaded successfully");
    assert!(body["data"]["uploadedAt"].is_string());

    let (status, body) = send!(app, test::TestRequest::get().uri(&location));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["imageData"], PNG_BASE64);
    assert_eq!(body["data"]["contentType"], "image/png");
    assert_eq!(body["data"]["contactId"], 1);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/contacts/1/images"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send!(app, test::TestRequest::delete().uri(&location));
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send!(app, test::TestRequest::get().uri(&location));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_base64_is_rejected_before_insert() {
    let test_db = common::TestDb::new("test_invalid_base64_is_rejected_before_insert.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo.clone());
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "Alice", "type": 0}))
    );

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images")
            .set_json(image_body("not base64 at all!"))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["Invalid base64 image data"]));
    assert!(
        repo.list_contact_images(ContactId::new(1).unwrap())
            .unwrap()
            .is_empty()
    );
}

#[actix_web::test]
async fn test_image_cap_boundaries() {
    let test_db = common::TestDb::new("test_image_cap_boundaries.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo.clone());
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "Alice", "type": 0}))
    );
    let contact_id = ContactId::new(1).unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images/batch")
            .set_json(batch_body(9))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Images uploaded successfully");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images/batch")
            .set_json(batch_body(2))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Cannot upload 2 images. Maximum allowed is 1 more images"
    );
    assert_eq!(repo.list_contact_images(contact_id).unwrap().len(), 9);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images")
            .set_json(image_body(PNG_BASE64))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images")
            .set_json(image_body(PNG_BASE64))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Maximum number of images (10) reached for this contact"
    );
    assert_eq!(repo.list_contact_images(contact_id).unwrap().len(), 10);
}

#[actix_web::test]
async fn test_limit_checks() {
    let test_db = common::TestDb::new("test_limit_checks.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "Alice", "type": 0}))
    );
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images/batch")
            .set_json(batch_body(5))
    );

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/contacts/1/images/validate-limit?additionalImages=5")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], true);
    assert_eq!(body["message"], "Can add more images");

    let (_, body) = send!(
        app,
        test::TestRequest::get().uri("/api/contacts/1/images/validate-limit?additionalImages=6")
    );
    assert_eq!(body["data"], false);
    assert_eq!(body["message"], "Image limit reached");

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/contacts/1/can-add-images")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], true);

    let (status, _) = send!(
        app,
        test::TestRequest::get().uri("/api/contacts/1/can-add-images?additionalImages=-1")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
        app,
        test::TestRequest::get().uri("/api/contacts/99/images/validate-limit")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_contact_removes_images() {
    let test_db = common::TestDb::new("test_delete_contact_removes_images.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo.clone());
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "Alice", "type": 0}))
    );
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images/batch")
            .set_json(batch_body(4))
    );

    let (status, _) = send!(app, test::TestRequest::delete().uri("/api/contacts/1"));
    assert_eq!(status, StatusCode::OK);

    assert!(
        repo.list_contact_images(ContactId::new(1).unwrap())
            .unwrap()
            .is_empty()
    );
    let (status, _) = send!(app, test::TestRequest::get().uri("/api/contacts/1/images"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_error_envelopes() {
    let test_db = common::TestDb::new("test_error_envelopes.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/nowhere"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/contacts/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images/batch")
            .set_json(json!([]))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["No images provided"]));

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/contacts/0"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact with ID 0 not found");

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/contacts/1/images/5")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Image with ID 5 not found for contact 1");
}

#[actix_web::test]
async fn test_create_defaults_type_and_accepts_wrapped_base64() {
    let test_db = common::TestDb::new("test_create_defaults_type_and_accepts_wrapped_base64.db");
    let app = test_app!(DieselRepository::new(test_db.pool()));

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({"name": "Bob"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["type"], 0);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/contacts/1/images")
            .set_json(json!({"imageData": "aGVs\r\nbG8=\r\n"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["imageData"], "aGVsbG8=");
}
