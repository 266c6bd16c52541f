use serde::{Deserialize, Serialize};

/// A single stored contact record. The id is assigned by the store on
/// creation and immutable afterwards, the phone number is held digits-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    /// unix timestamp in seconds, set by the store
    pub created_at: u64,
    /// unix timestamp in seconds, maintained by the store
    pub updated_at: u64,
}

/// The caller-provided fields of a contact, used for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
}

/// Query parameters for a paginated, optionally filtered contact listing.
/// Pages are one-based at every layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    /// case-insensitive substring matched against the email field
    pub search: Option<String>,
    pub page: u64,
    pub limit: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: super::constants::DEFAULT_PAGE,
            limit: super::constants::DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a contact listing, with the bookkeeping needed to render
/// pagination controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub total_records: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

impl ContactPage {
    pub fn empty(current_page: u64) -> Self {
        Self {
            contacts: vec![],
            total_records: 0,
            total_pages: 0,
            current_page,
        }
    }
}
