#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_whois_application::ports::{
    DomainNormalizer, ParserProvider, ResponseParser, WhoisLoader,
};
use ferrous_whois_application::services::TldEndpoint;
use ferrous_whois_domain::{DomainError, DomainInfo, DomainResponse, ParserKind, QueryFormat};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Scripted = Result<String, DomainError>;

/// Loader answering from scripted responses and recording every request.
///
/// Exact `(host, query)` scripts win over per-host scripts; anything
/// unscripted fails with a refused connection.
pub struct MockWhoisLoader {
    by_query: Mutex<HashMap<(String, String), Scripted>>,
    by_host: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockWhoisLoader {
    pub fn new() -> Self {
        Self {
            by_query: Mutex::new(HashMap::new()),
            by_host: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(&self, host: &str, query: &str, text: &str) {
        self.by_query
            .lock()
            .unwrap()
            .insert((host.to_string(), query.to_string()), Ok(text.to_string()));
    }

    pub fn set_error(&self, host: &str, query: &str, error: DomainError) {
        self.by_query
            .lock()
            .unwrap()
            .insert((host.to_string(), query.to_string()), Err(error));
    }

    pub fn set_host_response(&self, host: &str, text: &str) {
        self.by_host
            .lock()
            .unwrap()
            .insert(host.to_string(), Ok(text.to_string()));
    }

    pub fn set_host_error(&self, host: &str, error: DomainError) {
        self.by_host
            .lock()
            .unwrap()
            .insert(host.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, host: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(h, _)| h == host)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockWhoisLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhoisLoader for MockWhoisLoader {
    async fn load_text(&self, host: &str, query: &str) -> Result<String, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((host.to_string(), query.to_string()));

        let key = (host.to_string(), query.to_string());
        if let Some(scripted) = self.by_query.lock().unwrap().get(&key) {
            return scripted.clone();
        }
        if let Some(scripted) = self.by_host.lock().unwrap().get(host) {
            return scripted.clone();
        }
        Err(DomainError::TransportConnectionRefused {
            server: host.to_string(),
        })
    }
}

/// Reads `Domain Name:` and `Whois Server:` lines; no domain line means no data.
pub struct FieldParser;

impl ResponseParser for FieldParser {
    fn parse(&self, response: &DomainResponse) -> Option<DomainInfo> {
        let mut info: Option<DomainInfo> = None;
        let mut referral = None;

        for line in response.text.lines() {
            if let Some(value) = line.strip_prefix("Domain Name:") {
                info = Some(DomainInfo::new(value.trim().to_lowercase()));
            } else if let Some(value) = line.strip_prefix("Whois Server:") {
                referral = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("Registrar:") {
                if let Some(info) = info.as_mut() {
                    info.registrar = Some(value.trim().to_string());
                }
            }
        }

        info.map(|mut info| {
            info.whois_server = referral;
            info
        })
    }
}

pub struct MockParserProvider;

impl ParserProvider for MockParserProvider {
    fn parser_for(&self, _kind: ParserKind) -> Arc<dyn ResponseParser> {
        Arc::new(FieldParser)
    }
}

pub struct LowercaseNormalizer;

impl DomainNormalizer for LowercaseNormalizer {
    fn to_ascii(&self, domain: &str) -> Result<String, DomainError> {
        let domain = domain.trim().trim_end_matches('.').to_lowercase();
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName("empty domain".to_string()));
        }
        Ok(domain)
    }
}

pub fn endpoint(zone: &str, host: &str) -> Arc<TldEndpoint> {
    Arc::new(TldEndpoint::new(
        zone,
        host,
        Arc::new(QueryFormat::default()),
        Arc::new(FieldParser),
    ))
}

pub fn centralized_endpoint(zone: &str, host: &str) -> Arc<TldEndpoint> {
    Arc::new(
        TldEndpoint::new(
            zone,
            host,
            Arc::new(QueryFormat::default()),
            Arc::new(FieldParser),
        )
        .with_centralized(true),
    )
}

pub fn registered(domain: &str) -> String {
    format!("Domain Name: {}\r\nRegistrar: Example Registrar\r\n", domain.to_uppercase())
}

pub fn registered_with_referral(domain: &str, referral: &str) -> String {
    format!(
        "Domain Name: {}\r\nWhois Server: {}\r\n",
        domain.to_uppercase(),
        referral
    )
}

pub fn query(domain: &str) -> String {
    format!("{}\r\n", domain)
}

pub fn strict_query(domain: &str) -> String {
    format!("={}\r\n", domain)
}

pub const NO_MATCH: &str = "No match for domain.\r\n";
