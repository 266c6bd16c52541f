// DB constants
pub const DB_TABLE: &str = "table";

pub const DB_SEARCH_TERM: &str = "search_term";
pub const DB_EMAIL_NORMALIZED: &str = "email_normalized";
pub const DB_LIMIT: &str = "limit";
pub const DB_START: &str = "start";
