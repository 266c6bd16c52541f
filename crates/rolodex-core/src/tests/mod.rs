#[allow(clippy::module_inception)]
pub mod tests {
    use crate::util::{email, phone};

    #[test]
    fn email_normalize_lowercases_and_trims() {
        assert_eq!(email::normalize("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn email_validity() {
        assert!(email::is_valid("alice@example.com"));
        assert!(email::is_valid(" alice@example.co.uk "));
        assert!(!email::is_valid(""));
        assert!(!email::is_valid("alice"));
        assert!(!email::is_valid("alice@"));
        assert!(!email::is_valid("@example.com"));
        assert!(!email::is_valid("alice@example"));
        assert!(!email::is_valid("alice@.com"));
        assert!(!email::is_valid("alice@example.com."));
        assert!(!email::is_valid("a@b@example.com"));
    }

    #[test]
    fn phone_normalize_keeps_digits_only() {
        assert_eq!(phone::normalize("(555) 123-4567"), "5551234567");
        assert_eq!(phone::normalize("+1 555 123 4567"), "15551234567");
        assert_eq!(phone::normalize("no digits"), "");
    }

    #[test]
    fn phone_display_formatting() {
        assert_eq!(phone::format_display("5551234567"), "(555) 123-4567");
        assert_eq!(phone::format_display("15551234567"), "+1 (555) 123-4567");
        assert_eq!(phone::format_display("123456"), "123456");
    }

    #[test]
    fn page_query_defaults_to_first_page() {
        let query = crate::PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert!(query.search.is_none());
    }
}
