/// Canonical form used for uniqueness comparison and search matching -
/// uniqueness is case-insensitive, matching the search semantics.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Shallow plausibility check: exactly one '@', non-empty local and domain
/// parts and a dot somewhere in the domain. The store constraint, not this
/// check, is the authority on uniqueness.
pub fn is_valid(email: &str) -> bool {
    let email = email.trim();
    let mut parts = email.splitn(3, '@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
}
