use ferrous_whois_domain::{is_domain_zone, normalize_zone, DomainInfo, DomainResponse, WhoisServer};
use std::fmt;
use std::sync::Arc;

use crate::ports::{ParserProvider, QueryBuilder, ResponseParser};

/// A registry endpoint: the zone it serves, where to ask, and how to ask and read.
#[derive(Clone)]
pub struct TldEndpoint {
    pub zone: Arc<str>,
    pub host: Arc<str>,
    pub centralized: bool,
    query_builder: Arc<dyn QueryBuilder>,
    parser: Arc<dyn ResponseParser>,
}

impl TldEndpoint {
    pub fn new(
        zone: &str,
        host: impl Into<Arc<str>>,
        query_builder: Arc<dyn QueryBuilder>,
        parser: Arc<dyn ResponseParser>,
    ) -> Self {
        Self {
            zone: normalize_zone(zone).into(),
            host: host.into(),
            centralized: false,
            query_builder,
            parser,
        }
    }

    pub fn from_server(server: &WhoisServer, parsers: &dyn ParserProvider) -> Self {
        Self::new(
            &server.zone,
            server.host.as_str(),
            Arc::new(server.query_format.clone()),
            parsers.parser_for(server.parser),
        )
        .with_centralized(server.centralized)
    }

    pub fn with_centralized(mut self, centralized: bool) -> Self {
        self.centralized = centralized;
        self
    }

    pub fn is_domain_zone(&self, domain: &str) -> bool {
        is_domain_zone(domain, &self.zone)
    }

    pub fn build_query(&self, domain: &str, strict: bool) -> String {
        self.query_builder.build_query(domain, strict)
    }

    pub fn parse(&self, response: &DomainResponse) -> Option<DomainInfo> {
        self.parser.parse(response)
    }
}

impl fmt::Debug for TldEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TldEndpoint")
            .field("zone", &self.zone)
            .field("host", &self.host)
            .field("centralized", &self.centralized)
            .finish_non_exhaustive()
    }
}

pub fn build_endpoints(
    servers: &[WhoisServer],
    parsers: &dyn ParserProvider,
) -> Vec<Arc<TldEndpoint>> {
    servers
        .iter()
        .map(|server| Arc::new(TldEndpoint::from_server(server, parsers)))
        .collect()
}
