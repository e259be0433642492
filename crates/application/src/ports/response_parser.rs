use ferrous_whois_domain::{DomainInfo, DomainResponse, ParserKind};
use std::sync::Arc;

/// Extracts structured data from a raw response.
///
/// Malformed or empty input yields `None`, never an error.
pub trait ResponseParser: Send + Sync {
    fn parse(&self, response: &DomainResponse) -> Option<DomainInfo>;
}

/// Resolves the parser configured for a registry family.
pub trait ParserProvider: Send + Sync {
    fn parser_for(&self, kind: ParserKind) -> Arc<dyn ResponseParser>;
}
