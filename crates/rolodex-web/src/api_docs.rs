use crate::data::{
    ContactFormPayload, ContactWeb, ContactsPageResponse, StatusResponse, SuccessResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rolodex API",
        description = "Contact management HTTP API"
    ),
    paths(
        crate::handlers::contacts::list_contacts,
        crate::handlers::contacts::new_contact,
        crate::handlers::contacts::edit_contact,
        crate::handlers::contacts::remove_contact,
    ),
    components(schemas(
        ContactFormPayload,
        ContactWeb,
        ContactsPageResponse,
        SuccessResponse,
        StatusResponse
    ))
)]
pub struct ApiDocs;
