#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use rolodex_core::contact::{Contact, ContactPayload};
    use rolodex_persistence::{ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn find(
                &self,
                search: Option<String>,
                skip: u64,
                limit: u64,
            ) -> Result<(Vec<Contact>, u64)>;
            async fn get(&self, id: &str) -> Result<Option<Contact>>;
            async fn insert(&self, data: &ContactPayload) -> Result<Contact>;
            async fn update(&self, id: &str, data: &ContactPayload) -> Result<Contact>;
            async fn delete(&self, id: &str) -> Result<()>;
        }
    }

    pub fn contact_payload(first_name: &str, last_name: &str, email: &str) -> ContactPayload {
        ContactPayload {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone_number: "5551234567".to_string(),
            company: None,
            job_title: None,
        }
    }

    pub fn stored_contact(id: &str, payload: &ContactPayload) -> Contact {
        Contact {
            id: id.to_string(),
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            email: payload.email.clone(),
            phone_number: payload.phone_number.clone(),
            company: payload.company.clone(),
            job_title: payload.job_title.clone(),
            created_at: 1731593928,
            updated_at: 1731593928,
        }
    }
}
