use crate::Config;
use rolodex_persistence::{
    ContactStoreApi, SurrealContactStore, SurrealDbConfig, get_surreal_db,
};
use std::sync::Arc;

pub use rolodex_persistence::Error;
pub use rolodex_persistence::contact;
pub use rolodex_persistence::db;

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
}

/// Creates a new instance of the DbContext with the given SurrealDB configuration.
pub async fn get_db_context(conf: &Config) -> rolodex_persistence::Result<DbContext> {
    let surreal_db_config = SurrealDbConfig {
        connection_string: conf.surreal_db_connection.clone(),
        namespace: conf.db_namespace.clone(),
        database: conf.db_database.clone(),
    };
    let db = get_surreal_db(&surreal_db_config).await?;

    let contact_store = SurrealContactStore::new(db);
    contact_store.migrate().await?;

    Ok(DbContext {
        contact_store: Arc::new(contact_store),
    })
}
