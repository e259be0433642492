use std::sync::Arc;

/// One network round-trip: what was asked, of whom, and the raw answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResponse {
    pub domain: Arc<str>,
    pub query: Arc<str>,
    pub text: Arc<str>,
    pub host: Arc<str>,
}

impl DomainResponse {
    pub fn new(
        domain: impl Into<Arc<str>>,
        query: impl Into<Arc<str>>,
        text: impl Into<Arc<str>>,
        host: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            domain: domain.into(),
            query: query.into(),
            text: text.into(),
            host: host.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
