use ferrous_whois_domain::DomainError;
use std::sync::Arc;
use tracing::info;

use crate::services::DomainLookupService;

pub struct CheckAvailabilityUseCase {
    lookup: Arc<DomainLookupService>,
}

impl CheckAvailabilityUseCase {
    pub fn new(lookup: Arc<DomainLookupService>) -> Self {
        Self { lookup }
    }

    /// A domain is available when no matching registry returns data for it.
    pub async fn execute(&self, domain: &str) -> Result<bool, DomainError> {
        let resolution = self.lookup.load_domain_data(domain, None).await?;
        let available = !resolution.is_found();

        info!(domain = %domain, available, "Availability checked");
        Ok(available)
    }
}
