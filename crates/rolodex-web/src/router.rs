use crate::CONFIG;
use crate::api_docs::ApiDocs;
use crate::handlers;
use log::info;
use rocket::figment::Figment;
use rocket::http::Method;
use rocket::serde::json::Json;
use rocket::{Build, Config, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use rolodex_api::service::ServiceContext;
use serde::Serialize;
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    error: &'static str,
    message: String,
    code: u16,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: String, code: u16) -> Self {
        Self {
            error,
            message,
            code,
        }
    }

    pub fn to_json_string(&self) -> String {
        json!({ "error": self.error, "message": self.message }).to_string()
    }
}

pub fn rocket_main(context: ServiceContext) -> Rocket<Build> {
    let config = Figment::from(Config::default())
        .merge(("port", CONFIG.http_port))
        .merge(("address", CONFIG.http_address.to_owned()));

    // cross-origin access is restricted to the one configured frontend origin
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[&CONFIG.frontend_url]))
        .allowed_headers(AllowedHeaders::some(&["Content-Type", "Authorization"]))
        .allowed_methods(
            vec![
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Delete,
                Method::Options,
            ]
            .into_iter()
            .map(From::from)
            .collect(),
        )
        .to_cors()
        .expect("Cors setup failed");

    let rocket = rocket::custom(config)
        .attach(cors.clone())
        // catchers for CORS and API errors
        .mount("/", rocket_cors::catch_all_options_routes())
        .register("/", catchers![not_found])
        .manage(context)
        .manage(cors)
        .mount("/", routes![handlers::status])
        .mount(
            "/contacts",
            routes![
                handlers::contacts::list_contacts,
                handlers::contacts::new_contact,
                handlers::contacts::edit_contact,
                handlers::contacts::remove_contact,
            ],
        )
        .mount(
            "/",
            SwaggerUi::new("/swagger-ui/<_..>").url("/api-docs/openapi.json", ApiDocs::openapi()),
        );

    info!("HTTP Server Listening on {}", CONFIG.http_listen_url());

    rocket
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "not_found",
        format!("We couldn't find the requested path '{}'", req.uri()),
        404,
    ))
}
