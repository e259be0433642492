use serde::{Deserialize, Serialize};

/// Structured registration data extracted from a [`DomainResponse`](crate::DomainResponse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub domain_name: String,

    /// Registry the response points to for more authoritative data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_server: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,

    #[serde(default)]
    pub states: Vec<String>,

    #[serde(default)]
    pub name_servers: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl DomainInfo {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Default::default()
        }
    }

    pub fn with_whois_server(mut self, host: impl Into<String>) -> Self {
        self.whois_server = Some(host.into());
        self
    }

    /// Referral host, `None` when absent or blank.
    pub fn referral_host(&self) -> Option<&str> {
        self.whois_server
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }
}
