use ferrous_whois_application::services::{
    build_endpoints, DomainLookupService, ReferralResolver, TldEndpoint, TldServerRegistry,
};
use ferrous_whois_domain::{Config, WhoisServer};
use ferrous_whois_infrastructure::whois::{IdnaNormalizer, ParserRegistry, TcpWhoisLoader};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct WhoisServices {
    pub registry: Arc<TldServerRegistry>,
    pub parsers: Arc<ParserRegistry>,
    pub lookup: Arc<DomainLookupService>,
}

impl WhoisServices {
    pub fn new(config: &Config) -> Self {
        let parsers = Arc::new(ParserRegistry::new());
        let registry = Arc::new(TldServerRegistry::new(build_endpoints(
            &config.servers,
            parsers.as_ref(),
        )));

        let loader = Arc::new(
            TcpWhoisLoader::new(Duration::from_secs(config.whois.timeout_secs))
                .with_default_port(config.whois.default_port),
        );
        let resolver = Arc::new(
            ReferralResolver::new(loader).with_max_referral_hops(config.whois.max_referral_hops),
        );
        let lookup = Arc::new(DomainLookupService::new(
            registry.clone(),
            resolver,
            Arc::new(IdnaNormalizer::new()),
        ));

        info!(
            servers = config.servers.len(),
            timeout_secs = config.whois.timeout_secs,
            max_referral_hops = config.whois.max_referral_hops,
            "WHOIS services initialized"
        );

        Self {
            registry,
            parsers,
            lookup,
        }
    }

    /// Single endpoint for `host`, used instead of zone matching.
    pub fn ad_hoc_endpoint(&self, domain: &str, host: &str) -> Arc<TldEndpoint> {
        let zone = domain
            .trim()
            .trim_end_matches('.')
            .split_once('.')
            .map(|(_, zone)| zone)
            .unwrap_or(domain);

        Arc::new(TldEndpoint::from_server(
            &WhoisServer::new(zone, host),
            self.parsers.as_ref(),
        ))
    }
}
