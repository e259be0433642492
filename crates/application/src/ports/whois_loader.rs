use async_trait::async_trait;
use ferrous_whois_domain::DomainError;

/// Transport capability: sends a request to a WHOIS host and returns the raw text.
#[async_trait]
pub trait WhoisLoader: Send + Sync {
    async fn load_text(&self, host: &str, query: &str) -> Result<String, DomainError>;
}
