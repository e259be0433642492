use ferrous_whois_domain::{Config, DomainError};
use std::sync::Arc;
use tracing::info;

use crate::ports::ParserProvider;
use crate::services::{build_endpoints, TldServerRegistry};

pub struct ReloadServersUseCase {
    registry: Arc<TldServerRegistry>,
    parsers: Arc<dyn ParserProvider>,
}

impl ReloadServersUseCase {
    pub fn new(registry: Arc<TldServerRegistry>, parsers: Arc<dyn ParserProvider>) -> Self {
        Self { registry, parsers }
    }

    /// Replaces the endpoint set with the servers of `config_path`.
    pub fn execute(&self, config_path: &str) -> Result<usize, DomainError> {
        let config = Config::load(Some(config_path), Default::default())
            .map_err(|e| DomainError::ConfigError(format!("Config load error: {}", e)))?;

        config
            .validate()
            .map_err(|e| DomainError::ConfigError(format!("Config validation error: {}", e)))?;

        let endpoints = build_endpoints(&config.servers, self.parsers.as_ref());
        let count = endpoints.len();
        self.registry.set_servers(endpoints);

        info!(count, "Whois servers reloaded from: {}", config_path);

        Ok(count)
    }
}
