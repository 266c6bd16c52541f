use anyhow::{Result, anyhow};
use std::sync::OnceLock;

pub mod data;
mod persistence;
pub mod service;
#[cfg(test)]
mod tests;

pub use persistence::DbContext;
pub use persistence::get_db_context;

#[derive(Debug, Clone)]
pub struct Config {
    pub surreal_db_connection: String,
    pub db_namespace: String,
    pub db_database: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init(conf: Config) -> Result<()> {
    CONFIG
        .set(conf)
        .map_err(|e| anyhow!("Could not initialize contact API: {e:?}"))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("contact API is not initialized")
}
