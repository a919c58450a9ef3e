use actix_web::{HttpResponse, Responder, get};

use crate::dto::health::HealthDto;

/// Liveness probe; never touches the database.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthDto::healthy())
}
