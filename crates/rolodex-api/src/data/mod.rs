pub use rolodex_core::constants;
pub use rolodex_core::contact;
pub use rolodex_core::util;

pub use rolodex_core::Contact;
pub use rolodex_core::ContactPage;
pub use rolodex_core::ContactPayload;
pub use rolodex_core::PageQuery;
