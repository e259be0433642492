use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No servers matched for domain '{0}'")]
    ServerMismatch(String),

    #[error("Connection to {host} failed: {source}")]
    ConnectionFailure {
        host: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Wraps a transport error as the failure surfaced for `host`.
    ///
    /// An error that already is a `ConnectionFailure` is returned unchanged.
    pub fn into_connection_failure(self, host: &str) -> Self {
        match self {
            err @ DomainError::ConnectionFailure { .. } => err,
            other => DomainError::ConnectionFailure {
                host: host.to_string(),
                source: Box::new(other),
            },
        }
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(self, DomainError::ConnectionFailure { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::IoError(_)
                | DomainError::ConnectionFailure { .. }
        )
    }
}
