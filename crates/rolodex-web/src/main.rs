use anyhow::Result;
use clap::Parser;
use config::Config;
use log::{error, info};
use rolodex_api::get_db_context;
use rolodex_api::service::create_service_context;

mod api_docs;
mod config;
mod data;
mod error;
mod handlers;
mod router;

// MAIN
#[macro_use]
extern crate lazy_static;
lazy_static! {
    pub static ref CONFIG: Config = Config::parse();
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let conf = CONFIG.clone();

    // Initialize the API
    let api_config = rolodex_api::Config {
        surreal_db_connection: conf.surreal_db_connection.clone(),
        db_namespace: conf.db_namespace.clone(),
        db_database: conf.db_database.clone(),
    };
    rolodex_api::init(api_config.clone())?;

    // Initialize the database context
    let db = get_db_context(&api_config).await?;
    let service_context = create_service_context(api_config, db).await?;

    if let Err(e) = router::rocket_main(service_context).launch().await {
        error!("Web server stopped with error: {e}");
    }

    info!("web server was shut down...");
    Ok(())
}
