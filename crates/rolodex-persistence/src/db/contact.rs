use super::super::Result;
use crate::{
    Error,
    constants::{DB_EMAIL_NORMALIZED, DB_LIMIT, DB_SEARCH_TERM, DB_START, DB_TABLE},
    contact::ContactStoreApi,
};
use async_trait::async_trait;
use rolodex_core::{
    contact::{Contact, ContactPayload},
    util::{date, email},
};
use serde::{Deserialize, Serialize};
use surrealdb::{Surreal, engine::any::Any, sql::Thing};
use uuid::Uuid;

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contact";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Defines the unique index on the normalized email. The index is the
    /// final authority on uniqueness - insert/update pre-checks exist only
    /// to surface a precise error.
    pub async fn migrate(&self) -> Result<()> {
        self.db
            .query(
                "DEFINE INDEX IF NOT EXISTS contact_email_unique ON TABLE contact FIELDS email_normalized UNIQUE",
            )
            .await?;
        Ok(())
    }

    async fn find_by_normalized_email(&self, normalized: &str) -> Result<Option<ContactDb>> {
        let result: Vec<ContactDb> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE email_normalized = $email_normalized")
            .bind((DB_TABLE, Self::TABLE))
            .bind((DB_EMAIL_NORMALIZED, normalized.to_owned()))
            .await?
            .take(0)?;
        Ok(result.into_iter().next())
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn find(
        &self,
        search: Option<String>,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<Contact>, u64)> {
        let term = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut res = match term {
            Some(term) => {
                self.db
                    .query(
                        "SELECT * FROM type::table($table) WHERE string::lowercase(email) CONTAINS $search_term ORDER BY created_at ASC, id ASC LIMIT $limit START $start",
                    )
                    .query(
                        "SELECT count() FROM type::table($table) WHERE string::lowercase(email) CONTAINS $search_term GROUP ALL",
                    )
                    .bind((DB_TABLE, Self::TABLE))
                    .bind((DB_SEARCH_TERM, term))
                    .bind((DB_LIMIT, limit))
                    .bind((DB_START, skip))
                    .await?
            }
            None => {
                self.db
                    .query(
                        "SELECT * FROM type::table($table) ORDER BY created_at ASC, id ASC LIMIT $limit START $start",
                    )
                    .query("SELECT count() FROM type::table($table) GROUP ALL")
                    .bind((DB_TABLE, Self::TABLE))
                    .bind((DB_LIMIT, limit))
                    .bind((DB_START, skip))
                    .await?
            }
        };

        let rows: Vec<ContactDb> = res.take(0)?;
        let count: Option<CountDb> = res.take(1)?;
        let total = count.map(|c| c.count).unwrap_or(0);
        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let result: Option<ContactDb> = self.db.select((Self::TABLE, id)).await?;
        Ok(result.map(|c| c.into()))
    }

    async fn insert(&self, data: &ContactPayload) -> Result<Contact> {
        let normalized = email::normalize(&data.email);
        if self.find_by_normalized_email(&normalized).await?.is_some() {
            return Err(Error::DuplicateEmail(data.email.clone()));
        }

        let id = Uuid::new_v4().to_string();
        let now = date::timestamp();
        let entity = ContactDb::from_payload(data, normalized, now, now);
        let created: Option<ContactDb> = self
            .db
            .create((Self::TABLE, id.clone()))
            .content(entity)
            .await?;
        match created {
            Some(c) => Ok(c.into()),
            None => Err(Error::InsertFailed(format!("contact {id}"))),
        }
    }

    async fn update(&self, id: &str, data: &ContactPayload) -> Result<Contact> {
        let existing: Option<ContactDb> = self.db.select((Self::TABLE, id)).await?;
        let Some(existing) = existing else {
            return Err(Error::NoSuchEntity("contact".to_string(), id.to_owned()));
        };

        let normalized = email::normalize(&data.email);
        if let Some(other) = self.find_by_normalized_email(&normalized).await? {
            let other_id = other.id.map(|t| t.id.to_raw());
            if other_id.as_deref() != Some(id) {
                return Err(Error::DuplicateEmail(data.email.clone()));
            }
        }

        let entity =
            ContactDb::from_payload(data, normalized, existing.created_at, date::timestamp());
        let updated: Option<ContactDb> = self
            .db
            .update((Self::TABLE, id))
            .content(entity)
            .await?;
        match updated {
            Some(c) => Ok(c.into()),
            None => Err(Error::NoSuchEntity("contact".to_string(), id.to_owned())),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let deleted: Option<ContactDb> = self.db.delete((Self::TABLE, id)).await?;
        match deleted {
            Some(_) => Ok(()),
            None => Err(Error::NoSuchEntity("contact".to_string(), id.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_normalized: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl ContactDb {
    fn from_payload(
        data: &ContactPayload,
        email_normalized: String,
        created_at: u64,
        updated_at: u64,
    ) -> Self {
        Self {
            id: None,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            email_normalized,
            phone_number: data.phone_number.clone(),
            company: data.company.clone(),
            job_title: data.job_title.clone(),
            created_at,
            updated_at,
        }
    }
}

impl From<ContactDb> for Contact {
    fn from(value: ContactDb) -> Self {
        Self {
            id: value.id.map(|t| t.id.to_raw()).unwrap_or_default(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone_number: value.phone_number,
            company: value.company,
            job_title: value.job_title,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CountDb {
    count: u64,
}
