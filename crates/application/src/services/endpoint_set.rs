use ferrous_whois_domain::DomainError;
use std::sync::Arc;

use super::endpoint::TldEndpoint;

/// Endpoints ordered by descending zone length; ties keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct EndpointSet {
    endpoints: Vec<Arc<TldEndpoint>>,
}

impl EndpointSet {
    pub fn new(mut endpoints: Vec<Arc<TldEndpoint>>) -> Self {
        endpoints.sort_by(|a, b| b.zone.len().cmp(&a.zone.len()));
        Self { endpoints }
    }

    pub fn with_added(&self, endpoints: Vec<Arc<TldEndpoint>>) -> Self {
        let mut merged = self.endpoints.clone();
        merged.extend(endpoints);
        Self::new(merged)
    }

    pub fn endpoints(&self) -> &[Arc<TldEndpoint>] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// All endpoints tied for the most specific zone containing `domain`.
    ///
    /// Scanning stops at the first endpoint whose zone is shorter than the
    /// best match so far. With `quiet`, no match yields an empty list
    /// instead of `ServerMismatch`.
    pub fn match_endpoints(
        &self,
        domain: &str,
        quiet: bool,
    ) -> Result<Vec<Arc<TldEndpoint>>, DomainError> {
        let mut matched = Vec::new();
        let mut floor = 0;

        for endpoint in &self.endpoints {
            let zone_len = endpoint.zone.len();
            if zone_len < floor {
                break;
            }
            if endpoint.is_domain_zone(domain) {
                floor = floor.max(zone_len);
                matched.push(Arc::clone(endpoint));
            }
        }

        if matched.is_empty() && !quiet {
            return Err(DomainError::ServerMismatch(domain.to_string()));
        }

        Ok(matched)
    }
}
