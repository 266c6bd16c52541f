use rolodex_core::contact::{Contact, ContactPayload};

use super::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns one page of contacts matching the optional search term
    /// (case-insensitive substring of the email field) in stable store
    /// order, plus the total count of matching records.
    async fn find(
        &self,
        search: Option<String>,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<Contact>, u64)>;
    async fn get(&self, id: &str) -> Result<Option<Contact>>;
    /// Assigns id and timestamps. Fails with DuplicateEmail if another
    /// record holds the same email, compared case-insensitively.
    async fn insert(&self, data: &ContactPayload) -> Result<Contact>;
    /// Replaces the payload fields of an existing record, bumping
    /// updated_at. Fails with NoSuchEntity for an unknown id.
    async fn update(&self, id: &str, data: &ContactPayload) -> Result<Contact>;
    /// Fails with NoSuchEntity for an unknown id.
    async fn delete(&self, id: &str) -> Result<()>;
}
