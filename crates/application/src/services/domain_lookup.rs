use ferrous_whois_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::endpoint::TldEndpoint;
use super::referral_resolver::{ReferralResolver, Resolution};
use super::server_registry::TldServerRegistry;
use crate::ports::DomainNormalizer;

/// Normalizes a domain, picks its endpoints and runs the referral resolver.
pub struct DomainLookupService {
    registry: Arc<TldServerRegistry>,
    resolver: Arc<ReferralResolver>,
    normalizer: Arc<dyn DomainNormalizer>,
}

impl DomainLookupService {
    pub fn new(
        registry: Arc<TldServerRegistry>,
        resolver: Arc<ReferralResolver>,
        normalizer: Arc<dyn DomainNormalizer>,
    ) -> Self {
        Self {
            registry,
            resolver,
            normalizer,
        }
    }

    /// Uses `endpoint` when given, otherwise every endpoint of the most
    /// specific matching zone.
    #[instrument(skip(self, endpoint))]
    pub async fn load_domain_data(
        &self,
        domain: &str,
        endpoint: Option<Arc<TldEndpoint>>,
    ) -> Result<Resolution, DomainError> {
        let domain = self.normalizer.to_ascii(domain)?;

        let endpoints = match endpoint {
            Some(endpoint) => vec![endpoint],
            None => self.registry.match_endpoints(&domain, false)?,
        };

        debug!(
            domain = %domain,
            zones = ?endpoints.iter().map(|e| e.zone.as_ref()).collect::<Vec<_>>(),
            "Resolving domain"
        );

        self.resolver.resolve(&domain, &endpoints).await
    }
}
