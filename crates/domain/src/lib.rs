//! Ferrous WHOIS Domain Layer
pub mod config;
pub mod domain_info;
pub mod domain_response;
pub mod errors;
pub mod whois_server;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, WhoisConfig};
pub use domain_info::DomainInfo;
pub use domain_response::DomainResponse;
pub use errors::DomainError;
pub use whois_server::{ParserKind, QueryFormat, WhoisServer};
pub use zone::{is_domain_zone, normalize_zone};
