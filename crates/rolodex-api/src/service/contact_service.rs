use super::{Error, Result};
use async_trait::async_trait;
use log::info;
use rolodex_core::{
    constants::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS},
    contact::{Contact, ContactPage, ContactPayload},
    util::{email, phone},
};
use rolodex_persistence::ContactStoreApi;
use std::sync::Arc;

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns the given page of the contact list, optionally filtered by a
    /// case-insensitive search over the email field. Zero matches is a
    /// valid empty page, not an error.
    async fn list(&self, search: Option<&str>, page: u64, limit: u64) -> Result<ContactPage>;

    /// Validates and stores a new contact, returning it with its assigned id.
    async fn add_contact(&self, payload: ContactPayload) -> Result<Contact>;

    /// Validates the payload and replaces the fields of the contact with
    /// the given id, returning the updated record.
    async fn update_contact(&self, id: &str, payload: ContactPayload) -> Result<Contact>;

    /// Removes the contact with the given id.
    async fn delete_contact(&self, id: &str) -> Result<()>;
}

/// The contact service is responsible for the contact list, its pagination
/// and search, and all single-contact mutations.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn list(&self, search: Option<&str>, page: u64, limit: u64) -> Result<ContactPage> {
        if page < 1 {
            return Err(Error::Validation(format!("page must be >= 1, got {page}")));
        }
        if limit < 1 {
            return Err(Error::Validation(format!("limit must be > 0, got {limit}")));
        }

        let skip = (page - 1).saturating_mul(limit);
        let (contacts, total_records) = self
            .store
            .find(search.map(|s| s.to_owned()), skip, limit)
            .await
            .map_err(map_store_err)?;

        Ok(ContactPage {
            contacts,
            total_records,
            total_pages: total_records.div_ceil(limit),
            current_page: page,
        })
    }

    async fn add_contact(&self, payload: ContactPayload) -> Result<Contact> {
        let payload = validated(payload)?;
        let created = self.store.insert(&payload).await.map_err(map_store_err)?;
        info!("created contact {}", created.id);
        Ok(created)
    }

    async fn update_contact(&self, id: &str, payload: ContactPayload) -> Result<Contact> {
        let payload = validated(payload)?;
        let updated = self
            .store
            .update(id, &payload)
            .await
            .map_err(map_store_err)?;
        Ok(updated)
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        self.store.delete(id).await.map_err(map_store_err)?;
        info!("deleted contact {id}");
        Ok(())
    }
}

/// Checks required fields and normalizes the payload - names and email
/// trimmed, phone reduced to its digits, empty optional fields dropped.
/// Duplicates the store-level constraints on purpose so callers get a
/// precise, field-naming error; the store remains the final authority.
fn validated(payload: ContactPayload) -> Result<ContactPayload> {
    let first_name = payload.first_name.trim().to_owned();
    let last_name = payload.last_name.trim().to_owned();
    let email_addr = payload.email.trim().to_owned();
    let phone_raw = payload.phone_number.trim().to_owned();

    let mut missing = vec![];
    if first_name.is_empty() {
        missing.push("first_name");
    }
    if last_name.is_empty() {
        missing.push("last_name");
    }
    if email_addr.is_empty() {
        missing.push("email");
    }
    if phone_raw.is_empty() {
        missing.push("phone_number");
    }
    if !missing.is_empty() {
        return Err(Error::Validation(format!(
            "required fields missing: {}",
            missing.join(", ")
        )));
    }

    if !email::is_valid(&email_addr) {
        return Err(Error::Validation(format!(
            "invalid email address: {email_addr}"
        )));
    }

    let phone_digits = phone::normalize(&phone_raw);
    if phone_digits.len() < MIN_PHONE_DIGITS || phone_digits.len() > MAX_PHONE_DIGITS {
        return Err(Error::Validation(format!(
            "invalid phone number: {phone_raw}"
        )));
    }

    Ok(ContactPayload {
        first_name,
        last_name,
        email: email_addr,
        phone_number: phone_digits,
        company: payload
            .company
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty()),
        job_title: payload
            .job_title
            .map(|j| j.trim().to_owned())
            .filter(|j| !j.is_empty()),
    })
}

fn map_store_err(e: rolodex_persistence::Error) -> Error {
    match e {
        rolodex_persistence::Error::NoSuchEntity(_, _) => Error::NotFound,
        rolodex_persistence::Error::DuplicateEmail(email) => Error::DuplicateEmail(email),
        other => Error::Persistence(other),
    }
}
