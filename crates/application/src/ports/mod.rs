mod domain_normalizer;
mod query_builder;
mod response_parser;
mod whois_loader;

pub use domain_normalizer::DomainNormalizer;
pub use query_builder::QueryBuilder;
pub use response_parser::{ParserProvider, ResponseParser};
pub use whois_loader::WhoisLoader;
