use ferrous_whois_domain::{DomainError, DomainInfo};
use std::sync::Arc;

use crate::services::{DomainLookupService, TldEndpoint};

pub struct GetDomainInfoUseCase {
    lookup: Arc<DomainLookupService>,
}

impl GetDomainInfoUseCase {
    pub fn new(lookup: Arc<DomainLookupService>) -> Self {
        Self { lookup }
    }

    pub async fn execute(
        &self,
        domain: &str,
        endpoint: Option<Arc<TldEndpoint>>,
    ) -> Result<Option<DomainInfo>, DomainError> {
        let resolution = self.lookup.load_domain_data(domain, endpoint).await?;
        Ok(resolution.info)
    }
}
