use serde::{Deserialize, Serialize};
use std::fmt;

use super::zone::normalize_zone;

const DOMAIN_PLACEHOLDER: &str = "%s";
const DEFAULT_QUERY_FORMAT: &str = "%s\r\n";

/// Request template of a registry; `%s` is replaced by the domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct QueryFormat(String);

impl QueryFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strict queries use the `=` exact-match prefix understood by thin registries.
    pub fn build(&self, domain: &str, strict: bool) -> String {
        let query = self.0.replace(DOMAIN_PLACEHOLDER, domain);
        if strict {
            format!("={}", query)
        } else {
            query
        }
    }
}

impl Default for QueryFormat {
    fn default() -> Self {
        Self(DEFAULT_QUERY_FORMAT.to_string())
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    #[default]
    Common,
}

impl ParserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
        }
    }
}

/// Configuration form of a registry endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct WhoisServer {
    pub zone: String,

    pub host: String,

    /// Registries that hold all data themselves; their referrals are ignored.
    #[serde(default)]
    pub centralized: bool,

    #[serde(default)]
    pub query_format: QueryFormat,

    #[serde(default)]
    pub parser: ParserKind,
}

impl WhoisServer {
    pub fn new(zone: &str, host: impl Into<String>) -> Self {
        Self {
            zone: normalize_zone(zone),
            host: host.into(),
            centralized: false,
            query_format: QueryFormat::default(),
            parser: ParserKind::default(),
        }
    }

    pub fn centralized(mut self) -> Self {
        self.centralized = true;
        self
    }

    pub fn with_query_format(mut self, format: impl Into<String>) -> Self {
        self.query_format = QueryFormat::new(format);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if normalize_zone(&self.zone).is_empty() {
            return Err("Server zone cannot be empty".to_string());
        }
        if self.host.trim().is_empty() {
            return Err(format!("Server host for zone '{}' cannot be empty", self.zone));
        }
        if !self.query_format.as_str().contains(DOMAIN_PLACEHOLDER) {
            return Err(format!(
                "Query format for zone '{}' must contain '{}'",
                self.zone, DOMAIN_PLACEHOLDER
            ));
        }
        Ok(())
    }
}

impl fmt::Display for WhoisServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{} -> {}", self.zone, self.host)
    }
}
