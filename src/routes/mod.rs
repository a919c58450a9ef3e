//! HTTP handlers and the glue turning service results into envelopes.

use actix_web::error::{
    InternalError, JsonPayloadError, PathError, QueryPayloadError,
};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::dto::ApiResponse;
use crate::services::{ServiceError, ServiceResult};

pub mod contact_images;
pub mod contacts;
pub mod health;

/// Registers every `/api` handler plus `/health`.
///
/// `validate-limit` is registered before `{image_id}` so the literal segment
/// wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health).service(
        web::scope("/api")
            .service(contacts::list_contacts)
            .service(contacts::create_contact)
            .service(contacts::can_add_images)
            .service(contacts::get_contact)
            .service(contacts::update_contact)
            .service(contacts::delete_contact)
            .service(contact_images::validate_image_limit)
            .service(contact_images::upload_images)
            .service(contact_images::list_images)
            .service(contact_images::upload_image)
            .service(contact_images::get_image)
            .service(contact_images::delete_image),
    );
}

/// Extractor configuration answering malformed input with a 400 envelope.
pub fn extractor_config(cfg: &mut web::ServiceConfig, max_payload_bytes: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(max_payload_bytes)
            .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler));
}

fn bad_request(message: &str, detail: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::failure(message, vec![detail]))
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body for {}: {err}", req.path());
    let response = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge()
                .json(ApiResponse::<()>::failure("Request body too large", vec![err.to_string()]))
        }
        _ => bad_request("Invalid request body", err.to_string()),
    };
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected path {}: {err}", req.path());
    let response = bad_request("Invalid path parameter", err.to_string());
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query for {}: {err}", req.path());
    let response = bad_request("Invalid query parameter", err.to_string());
    InternalError::from_response(err, response).into()
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure("Resource not found", Vec::new()))
}

/// Runs a synchronous service call on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|err| ServiceError::Internal(err.to_string()))?
}

/// Wraps a successful payload in the envelope.
pub(crate) fn ok<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data, message))
}

/// Converts a service failure into its envelope; `failure` names the
/// operation for storage faults ("Failed to create contact").
pub(crate) fn service_error_response(err: ServiceError, failure: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(errors) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::failure("Validation failed", errors))
        }
        ServiceError::TypeConstraint(message) => HttpResponse::BadRequest()
            .json(ApiResponse::<()>::failure("Validation failed", vec![message])),
        ServiceError::NotFound(message) => {
            log::warn!("{message}");
            HttpResponse::NotFound().json(ApiResponse::<()>::failure(message, Vec::new()))
        }
        ServiceError::LimitExceeded(message) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::failure(message, Vec::new()))
        }
        ServiceError::Repository(err) => {
            log::error!("{failure}: {err}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::failure(failure, vec![err.to_string()]))
        }
        ServiceError::Internal(message) => {
            log::error!("{failure}: {message}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::failure(failure, vec![message]))
        }
    }
}
