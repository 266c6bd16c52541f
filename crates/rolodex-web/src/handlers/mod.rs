use crate::data::StatusResponse;
use crate::router::ErrorResponse;
use log::error;
use rocket::Response;
use rocket::serde::json::Json;
use rocket::{get, http::ContentType, http::Status, response::Responder};
use rolodex_api::service::Error;
use std::io::Cursor;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;

#[get("/")]
pub async fn status() -> Result<Json<StatusResponse>> {
    Ok(Json(StatusResponse {
        app_version: std::env::var("CARGO_PKG_VERSION").unwrap_or(String::from("unknown")),
    }))
}

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self.0 {
            Error::NotFound => {
                let body =
                    ErrorResponse::new("not_found", "not found".to_string(), 404).to_json_string();
                Response::build()
                    .status(Status::NotFound)
                    .header(ContentType::JSON)
                    .sized_body(body.len(), Cursor::new(body))
                    .ok()
            }
            Error::Validation(msg) => build_validation_response(msg),
            Error::DuplicateEmail(email) => {
                let body = ErrorResponse::new(
                    "duplicate_email",
                    format!("a contact with email {email} already exists"),
                    400,
                )
                .to_json_string();
                Response::build()
                    .status(Status::BadRequest)
                    .header(ContentType::JSON)
                    .sized_body(body.len(), Cursor::new(body))
                    .ok()
            }
            // for now handle all persistence errors as InternalServerError, there
            // will be cases where we want to handle them differently
            Error::Persistence(e) => {
                error!("{e}");
                Status::InternalServerError.respond_to(req)
            }
        }
    }
}

fn build_validation_response<'o>(msg: String) -> rocket::response::Result<'o> {
    let err_resp = ErrorResponse::new("validation_error", msg, 400);
    let body = err_resp.to_json_string();
    Response::build()
        .status(Status::BadRequest)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}
