use arc_swap::ArcSwap;
use ferrous_whois_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

use super::endpoint::TldEndpoint;
use super::endpoint_set::EndpointSet;

/// Holds the active endpoint set; reconfiguration swaps it as a whole.
///
/// Lookups take a snapshot, so a swap never affects a resolution already
/// in progress.
pub struct TldServerRegistry {
    endpoints: ArcSwap<EndpointSet>,
}

impl TldServerRegistry {
    pub fn new(endpoints: Vec<Arc<TldEndpoint>>) -> Self {
        Self {
            endpoints: ArcSwap::from_pointee(EndpointSet::new(endpoints)),
        }
    }

    pub fn snapshot(&self) -> Arc<EndpointSet> {
        self.endpoints.load_full()
    }

    pub fn servers(&self) -> Vec<Arc<TldEndpoint>> {
        self.endpoints.load().endpoints().to_vec()
    }

    pub fn set_servers(&self, endpoints: Vec<Arc<TldEndpoint>>) {
        let set = EndpointSet::new(endpoints);
        debug!(count = set.len(), "Endpoint set replaced");
        self.endpoints.store(Arc::new(set));
    }

    pub fn add_servers(&self, endpoints: Vec<Arc<TldEndpoint>>) {
        self.endpoints.rcu(|current| current.with_added(endpoints.clone()));
        debug!(count = self.endpoints.load().len(), "Endpoints added");
    }

    pub fn match_endpoints(
        &self,
        domain: &str,
        quiet: bool,
    ) -> Result<Vec<Arc<TldEndpoint>>, DomainError> {
        self.endpoints.load().match_endpoints(domain, quiet)
    }
}
