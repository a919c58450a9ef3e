use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::contact::{ContactDetailDto, ContactDto};
use crate::dto::{ApiResponse, ImageLimitQuery};
use crate::forms::contact::{CreateContactForm, UpdateContactForm};
use crate::repository::DieselRepository;
use crate::routes::{ok, run_blocking, service_error_response};
use crate::services::contacts as contacts_service;

#[get("/contacts")]
pub async fn list_contacts(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(move || contacts_service::list_contacts(repo.get_ref())).await {
        Ok(contacts) => ok(
            contacts.into_iter().map(ContactDto::from).collect::<Vec<_>>(),
            "Contacts retrieved successfully",
        ),
        Err(err) => service_error_response(err, "Failed to retrieve contacts"),
    }
}

#[get("/contacts/{id}")]
pub async fn get_contact(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    match run_blocking(move || contacts_service::get_contact(repo.get_ref(), id)).await {
        Ok(details) => ok(
            ContactDetailDto::from(details),
            "Contact retrieved successfully",
        ),
        Err(err) => service_error_response(err, "Failed to retrieve contact"),
    }
}

#[post("/contacts")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateContactForm>,
) -> impl Responder {
    match run_blocking(move || contacts_service::create_contact(repo.get_ref(), form)).await {
        Ok(contact) => {
            let location = format!("/api/contacts/{}", contact.id);
            HttpResponse::Created()
                .insert_header(("Location", location))
                .json(ApiResponse::success(
                    ContactDto::new(contact, 0),
                    "Contact created successfully",
                ))
        }
        Err(err) => service_error_response(err, "Failed to create contact"),
    }
}

#[put("/contacts/{id}")]
pub async fn update_contact(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateContactForm>,
) -> impl Responder {
    let id = id.into_inner();
    match run_blocking(move || contacts_service::update_contact(repo.get_ref(), id, form)).await {
        Ok(summary) => ok(ContactDto::from(summary), "Contact updated successfully"),
        Err(err) => service_error_response(err, "Failed to update contact"),
    }
}

#[delete("/contacts/{id}")]
pub async fn delete_contact(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    match run_blocking(move || contacts_service::delete_contact(repo.get_ref(), id)).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::empty("Contact deleted successfully")),
        Err(err) => service_error_response(err, "Failed to delete contact"),
    }
}

#[get("/contacts/{id}/can-add-images")]
pub async fn can_add_images(
    id: web::Path<i32>,
    query: web::Query<ImageLimitQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();
    let additional = query.additional();
    match run_blocking(move || {
        contacts_service::can_add_more_images(repo.get_ref(), id, additional)
    })
    .await
    {
        Ok(can_add) => ok(
            can_add,
            if can_add {
                "Can add more images"
            } else {
                "Image limit reached"
            },
        ),
        Err(err) => service_error_response(err, "Failed to check image limit"),
    }
}
