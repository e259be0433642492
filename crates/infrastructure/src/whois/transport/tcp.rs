use async_trait::async_trait;
use ferrous_whois_application::ports::WhoisLoader;
use ferrous_whois_domain::DomainError;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub const DEFAULT_WHOIS_PORT: u16 = 43;
const MAX_RESPONSE_SIZE: usize = 1024 * 1024;

/// Plain WHOIS over TCP: write the query, read until the server closes.
pub struct TcpWhoisLoader {
    timeout: Duration,
    default_port: u16,
}

impl TcpWhoisLoader {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            default_port: DEFAULT_WHOIS_PORT,
        }
    }

    pub fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }

    /// Splits `host`, `host:port` or `[v6]:port` into name and port.
    pub fn split_host<'a>(&self, host: &'a str) -> (&'a str, u16) {
        if let Some(rest) = host.strip_prefix('[') {
            if let Some((addr, tail)) = rest.split_once(']') {
                let port = tail
                    .strip_prefix(':')
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(self.default_port);
                return (addr, port);
            }
        }

        match host.split_once(':') {
            Some((name, port)) if !port.contains(':') => match port.parse() {
                Ok(port) => (name, port),
                Err(_) => (host, self.default_port),
            },
            _ => (host, self.default_port),
        }
    }

    async fn connect(&self, host: &str) -> Result<TcpStream, DomainError> {
        let (name, port) = self.split_host(host);

        let stream = tokio::time::timeout(self.timeout, TcpStream::connect((name, port)))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: host.to_string(),
            })?
            .map_err(|e| map_io_error(host, e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::IoError(format!("Failed to set TCP_NODELAY on {}: {}", host, e)))?;

        Ok(stream)
    }
}

#[async_trait]
impl WhoisLoader for TcpWhoisLoader {
    async fn load_text(&self, host: &str, query: &str) -> Result<String, DomainError> {
        let mut stream = self.connect(host).await?;

        tokio::time::timeout(self.timeout, async {
            stream.write_all(query.as_bytes()).await?;
            stream.flush().await
        })
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: host.to_string(),
        })?
        .map_err(|e| map_io_error(host, e))?;

        debug!(server = %host, query_len = query.len(), "WHOIS query sent");

        let mut response = Vec::new();
        tokio::time::timeout(
            self.timeout,
            (&mut stream)
                .take(MAX_RESPONSE_SIZE as u64)
                .read_to_end(&mut response),
        )
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: host.to_string(),
        })?
        .map_err(|e| map_io_error(host, e))?;

        debug!(server = %host, response_len = response.len(), "WHOIS response received");

        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}

fn map_io_error(host: &str, error: std::io::Error) -> DomainError {
    let server = host.to_string();
    match error.kind() {
        ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe => {
            DomainError::TransportConnectionReset { server }
        }
        ErrorKind::TimedOut => DomainError::TransportTimeout { server },
        _ => DomainError::IoError(format!("{}: {}", host, error)),
    }
}
