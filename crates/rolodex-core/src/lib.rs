pub mod constants;
pub mod contact;
#[cfg(test)]
mod tests;
pub mod util;

pub use contact::{Contact, ContactPage, ContactPayload, PageQuery};
