/// Canonical form of a zone: lower-case, without leading or trailing dots.
pub fn normalize_zone(zone: &str) -> String {
    zone.trim().trim_matches('.').to_ascii_lowercase()
}

/// Returns true when `domain` lies strictly below `zone`.
///
/// Matching respects label boundaries: `example.com` belongs to `com`,
/// `myexamplecom` does not, and `com` itself is not a domain of `com`.
pub fn is_domain_zone(domain: &str, zone: &str) -> bool {
    let zone = zone.trim_matches('.');
    if zone.is_empty() {
        return false;
    }
    let domain = domain.trim_end_matches('.');

    if domain.len() <= zone.len() + 1 {
        return false;
    }

    let split = domain.len() - zone.len();
    if !domain.is_char_boundary(split) {
        return false;
    }
    let (head, tail) = domain.split_at(split);

    head.ends_with('.') && head.len() > 1 && tail.eq_ignore_ascii_case(zone)
}
