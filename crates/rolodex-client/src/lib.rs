pub mod api;
pub mod browser;
pub mod constants;
pub mod debounce;
pub mod state;

use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// the request reached the API but was rejected as invalid
    #[error("Validation Error: {0}")]
    Validation(String),

    /// uniqueness violation on the contact email
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// the mutation target does not exist on the server
    #[error("not found")]
    NotFound,

    /// the API could not be reached at all
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// the API failed with an unexpected status
    #[error("Api error: {0}")]
    Api(String),

    /// an edit or delete was requested without a selected contact
    #[error("no contact selected")]
    NoSelection,
}

pub use api::{ContactApi, HttpContactApi};
pub use browser::ContactBrowser;
pub use debounce::DebouncedQueryTrigger;
pub use state::{ListState, Selection};
