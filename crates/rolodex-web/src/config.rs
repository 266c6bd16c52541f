use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    #[arg(long, env = "HTTP_ADDRESS", default_value = "127.0.0.1")]
    pub http_address: String,

    #[arg(long, env = "HTTP_PORT", default_value_t = 8000)]
    pub http_port: u16,

    #[arg(long, env = "SURREAL_DB_CONNECTION", default_value = "ws://localhost:8800")]
    pub surreal_db_connection: String,

    #[arg(long, env = "SURREAL_DB_NAMESPACE", default_value = "rolodex")]
    pub db_namespace: String,

    #[arg(long, env = "SURREAL_DB_DATABASE", default_value = "contacts")]
    pub db_database: String,

    /// The single browser origin allowed to call this API
    #[arg(long, env = "FRONTEND_URL", default_value = "http://localhost:3000")]
    pub frontend_url: String,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}
