use super::Result;
use crate::data::{
    ContactFormPayload, ContactListQuery, ContactWeb, ContactsPageResponse, FromWeb, IntoWeb,
    SuccessResponse,
};
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};
use rolodex_api::data::ContactPayload;
use rolodex_api::data::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use rolodex_api::service::ServiceContext;

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts",
    description = "Paginated contact list, optionally filtered by email substring",
    params(
        ("searchQuery" = Option<String>, Query, description = "case-insensitive substring matched against the email field"),
        ("page" = Option<u64>, Query, description = "one-based page index, defaults to 1"),
        ("limit" = Option<u64>, Query, description = "page size, defaults to 10")
    ),
    responses(
        (status = 200, description = "One page of contacts", body = ContactsPageResponse)
    )
)]
#[get("/?<filter..>")]
pub async fn list_contacts(
    state: &State<ServiceContext>,
    filter: ContactListQuery,
) -> Result<Json<ContactsPageResponse>> {
    let page = state
        .contact_service
        .list(
            filter.search_query.as_deref(),
            filter.page.unwrap_or(DEFAULT_PAGE),
            filter.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await?;
    Ok(Json(page.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts",
    description = "Create a new contact",
    responses(
        (status = 201, description = "The created contact", body = ContactWeb),
        (status = 400, description = "Validation error or duplicate email")
    )
)]
#[post("/", format = "json", data = "<new_contact_payload>")]
pub async fn new_contact(
    state: &State<ServiceContext>,
    new_contact_payload: Json<ContactFormPayload>,
) -> Result<Created<Json<ContactWeb>>> {
    let payload = ContactPayload::from_web(new_contact_payload.0);
    let contact = state.contact_service.add_contact(payload).await?;
    let location = format!("/contacts/{}", contact.id);
    Ok(Created::new(location).body(Json(contact.into_web())))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Replace the fields of an existing contact",
    params(("id" = String, Path, description = "contact identifier")),
    responses(
        (status = 200, description = "The updated contact", body = ContactWeb),
        (status = 400, description = "Validation error or duplicate email"),
        (status = 404, description = "No contact with this id")
    )
)]
#[put("/<id>", format = "json", data = "<edit_contact_payload>")]
pub async fn edit_contact(
    state: &State<ServiceContext>,
    id: &str,
    edit_contact_payload: Json<ContactFormPayload>,
) -> Result<Json<ContactWeb>> {
    let payload = ContactPayload::from_web(edit_contact_payload.0);
    let contact = state.contact_service.update_contact(id, payload).await?;
    Ok(Json(contact.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/contacts/{id}",
    description = "Delete a contact",
    params(("id" = String, Path, description = "contact identifier")),
    responses(
        (status = 200, description = "Deletion confirmation", body = SuccessResponse),
        (status = 404, description = "No contact with this id")
    )
)]
#[delete("/<id>")]
pub async fn remove_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<SuccessResponse>> {
    state.contact_service.delete_contact(id).await?;
    Ok(Json(SuccessResponse::new()))
}
