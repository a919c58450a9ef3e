use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::dto::contact_image::ContactImageDto;
use crate::dto::{ApiResponse, ImageLimitQuery};
use crate::forms::contact_image::UploadImageForm;
use crate::repository::DieselRepository;
use crate::routes::{ok, run_blocking, service_error_response};
use crate::services::contact_images as images_service;

#[get("/contacts/{contact_id}/images")]
pub async fn list_images(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let contact_id = contact_id.into_inner();
    match run_blocking(move || images_service::list_images(repo.get_ref(), contact_id)).await {
        Ok(images) => ok(
            images.into_iter().map(ContactImageDto::from).collect::<Vec<_>>(),
            "Images retrieved successfully",
        ),
        Err(err) => service_error_response(err, "Failed to retrieve images"),
    }
}

#[get("/contacts/{contact_id}/images/validate-limit")]
pub async fn validate_image_limit(
    contact_id: web::Path<i32>,
    query: web::Query<ImageLimitQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let contact_id = contact_id.into_inner();
    let additional = query.additional();
    let result = run_blocking(move || {
        images_service::validate_image_limit(repo.get_ref(), contact_id, additional)
    })
    .await;

    match result {
        Ok(true) => ok(true, "Can add more images"),
        Ok(false) => ok(false, "Image limit reached"),
        Err(err) => service_error_response(err, "Failed to validate image limit"),
    }
}

#[get("/contacts/{contact_id}/images/{image_id}")]
pub async fn get_image(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (contact_id, image_id) = path.into_inner();
    match run_blocking(move || images_service::get_image(repo.get_ref(), contact_id, image_id))
        .await
    {
        Ok(image) => ok(ContactImageDto::from(image), "Image retrieved successfully"),
        Err(err) => service_error_response(err, "Failed to retrieve image"),
    }
}

#[post("/contacts/{contact_id}/images")]
pub async fn upload_image(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UploadImageForm>,
) -> impl Responder {
    let contact_id = contact_id.into_inner();
    match run_blocking(move || images_service::upload_image(repo.get_ref(), contact_id, form))
        .await
    {
        Ok(image) => {
            let location = format!("/api/contacts/{contact_id}/images/{}", image.id);
            HttpResponse::Created()
                .insert_header(("Location", location))
                .json(ApiResponse::success(
                    ContactImageDto::from(image),
                    "Image uploaded successfully",
                ))
        }
        Err(err) => service_error_response(err, "Failed to upload image"),
    }
}

#[post("/contacts/{contact_id}/images/batch")]
pub async fn upload_images(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(forms): web::Json<Vec<UploadImageForm>>,
) -> impl Responder {
    let contact_id = contact_id.into_inner();
    match run_blocking(move || images_service::upload_images(repo.get_ref(), contact_id, forms))
        .await
    {
        Ok(images) => ok(
            images.into_iter().map(ContactImageDto::from).collect::<Vec<_>>(),
            "Images uploaded successfully",
        ),
        Err(err) => service_error_response(err, "Failed to upload images"),
    }
}

#[delete("/contacts/{contact_id}/images/{image_id}")]
pub async fn delete_image(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (contact_id, image_id) = path.into_inner();
    match run_blocking(move || images_service::delete_image(repo.get_ref(), contact_id, image_id))
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::empty("Image deleted successfully")),
        Err(err) => service_error_response(err, "Failed to delete image"),
    }
}
