use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use rolodex_core::contact::{Contact, ContactPage, ContactPayload, PageQuery};
use serde::Deserialize;
use url::Url;

/// Client-side port to the contact HTTP API. Everything the browser does
/// goes through this boundary, which keeps the sync state testable without
/// a network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn fetch_page(&self, params: &PageQuery) -> Result<ContactPage>;
    async fn create(&self, payload: &ContactPayload) -> Result<Contact>;
    async fn update(&self, id: &str, payload: &ContactPayload) -> Result<Contact>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Error body shape of the contact HTTP API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    message: String,
}

#[derive(Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpContactApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn contacts_url(&self) -> Result<Url> {
        self.base_url
            .join("contacts")
            .map_err(|e| Error::Api(e.to_string()))
    }

    fn contact_url(&self, id: &str) -> Result<Url> {
        self.base_url
            .join(&format!("contacts/{id}"))
            .map_err(|e| Error::Api(e.to_string()))
    }

    async fn error_for(response: reqwest::Response) -> Error {
        let status = response.status();
        let body: Option<ApiErrorBody> = response.json().await.ok();
        match (status, body) {
            (StatusCode::NOT_FOUND, _) => Error::NotFound,
            (StatusCode::BAD_REQUEST, Some(body)) if body.error == "duplicate_email" => {
                Error::DuplicateEmail(body.message)
            }
            (StatusCode::BAD_REQUEST, Some(body)) => Error::Validation(body.message),
            (status, Some(body)) => Error::Api(format!("{status}: {}", body.message)),
            (status, None) => Error::Api(status.to_string()),
        }
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn fetch_page(&self, params: &PageQuery) -> Result<ContactPage> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", params.page.to_string()),
            ("limit", params.limit.to_string()),
        ];
        if let Some(search) = &params.search {
            query.push(("searchQuery", search.clone()));
        }

        let response = self
            .client
            .get(self.contacts_url()?)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::Connectivity(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response.json().await.map_err(|e| Error::Api(e.to_string()))
    }

    async fn create(&self, payload: &ContactPayload) -> Result<Contact> {
        let response = self
            .client
            .post(self.contacts_url()?)
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Connectivity(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response.json().await.map_err(|e| Error::Api(e.to_string()))
    }

    async fn update(&self, id: &str, payload: &ContactPayload) -> Result<Contact> {
        let response = self
            .client
            .put(self.contact_url(id)?)
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Connectivity(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        response.json().await.map_err(|e| Error::Api(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.contact_url(id)?)
            .send()
            .await
            .map_err(|e| Error::Connectivity(e.to_string()))?;
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }
}
