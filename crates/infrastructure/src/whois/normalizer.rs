use ferrous_whois_application::ports::DomainNormalizer;
use ferrous_whois_domain::DomainError;
use url::Host;

/// Converts user input to the lower-case punycode form registries expect.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdnaNormalizer;

impl IdnaNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl DomainNormalizer for IdnaNormalizer {
    fn to_ascii(&self, domain: &str) -> Result<String, DomainError> {
        let trimmed = domain.trim().trim_end_matches('.');
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }

        match Host::parse(trimmed) {
            Ok(Host::Domain(ascii)) => Ok(ascii),
            Ok(_) => Err(DomainError::InvalidDomainName(format!(
                "{} is an IP address",
                trimmed
            ))),
            Err(e) => Err(DomainError::InvalidDomainName(format!("{}: {}", trimmed, e))),
        }
    }
}
