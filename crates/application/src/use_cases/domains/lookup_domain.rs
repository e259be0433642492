use ferrous_whois_domain::{DomainError, DomainResponse};
use std::sync::Arc;

use crate::services::{DomainLookupService, TldEndpoint};

pub struct LookupDomainUseCase {
    lookup: Arc<DomainLookupService>,
}

impl LookupDomainUseCase {
    pub fn new(lookup: Arc<DomainLookupService>) -> Self {
        Self { lookup }
    }

    /// Raw response behind the resolution, or the last one received when
    /// nothing could be parsed.
    pub async fn execute(
        &self,
        domain: &str,
        endpoint: Option<Arc<TldEndpoint>>,
    ) -> Result<Option<DomainResponse>, DomainError> {
        let resolution = self.lookup.load_domain_data(domain, endpoint).await?;
        Ok(resolution.response)
    }
}
