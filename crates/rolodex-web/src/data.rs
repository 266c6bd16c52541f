use rocket::FromForm;
use rolodex_api::data::util::phone;
use rolodex_api::data::{Contact, ContactPage, ContactPayload};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

pub trait FromWeb<T> {
    fn from_web(value: T) -> Self;
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub app_version: String,
}

/// A dummy response type signaling success of a request
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self { success: true }
    }
}

/// A contact as rendered for clients - the phone number is formatted for
/// display here, while the stored representation stays digits-only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactWeb {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: phone::format_display(&self.phone_number),
            company: self.company,
            job_title: self.job_title,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactsPageResponse {
    pub contacts: Vec<ContactWeb>,
    pub total_records: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

impl IntoWeb<ContactsPageResponse> for ContactPage {
    fn into_web(self) -> ContactsPageResponse {
        ContactsPageResponse {
            contacts: self.contacts.into_iter().map(|c| c.into_web()).collect(),
            total_records: self.total_records,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

/// Body of both contact creation and contact edits.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactFormPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
}

impl FromWeb<ContactFormPayload> for ContactPayload {
    fn from_web(value: ContactFormPayload) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone_number: value.phone_number,
            company: value.company,
            job_title: value.job_title,
        }
    }
}

#[derive(Debug, FromForm)]
pub struct ContactListQuery {
    #[field(name = "searchQuery")]
    pub search_query: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}
