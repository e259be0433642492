use ferrous_whois_domain::DomainError;

pub trait DomainNormalizer: Send + Sync {
    /// Canonical ASCII form used for matching and querying.
    fn to_ascii(&self, domain: &str) -> Result<String, DomainError>;
}
