use ferrous_whois_domain::{DomainError, DomainInfo, DomainResponse};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::endpoint::TldEndpoint;
use crate::ports::WhoisLoader;

pub const DEFAULT_MAX_REFERRAL_HOPS: usize = 3;

/// Outcome of resolving a domain against a list of candidate endpoints.
///
/// When `info` is present, `response` is the round-trip that produced it.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub response: Option<DomainResponse>,
    pub info: Option<DomainInfo>,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        self.info.is_some()
    }
}

/// Result of one node of the per-endpoint recursion.
#[derive(Debug, Default)]
struct Attempt {
    response: Option<DomainResponse>,
    info: Option<DomainInfo>,
    error: Option<DomainError>,
}

impl Attempt {
    /// Takes over `other`'s response and info if it found something.
    fn adopt_if_found(&mut self, other: Attempt) {
        if other.info.is_some() {
            self.response = other.response;
            self.info = other.info;
        }
        if self.error.is_none() {
            self.error = other.error;
        }
    }
}

pub struct ReferralResolver {
    loader: Arc<dyn WhoisLoader>,
    max_referral_hops: usize,
}

impl ReferralResolver {
    pub fn new(loader: Arc<dyn WhoisLoader>) -> Self {
        Self {
            loader,
            max_referral_hops: DEFAULT_MAX_REFERRAL_HOPS,
        }
    }

    pub fn with_max_referral_hops(mut self, hops: usize) -> Self {
        self.max_referral_hops = hops;
        self
    }

    /// Tries each candidate in order and stops at the first one that yields
    /// structured data. Without a match, the last response obtained is kept
    /// for diagnostics.
    #[instrument(skip(self, endpoints), fields(candidates = endpoints.len()))]
    pub async fn resolve(
        &self,
        domain: &str,
        endpoints: &[Arc<TldEndpoint>],
    ) -> Result<Resolution, DomainError> {
        let mut last_response = None;

        for endpoint in endpoints {
            let attempt = self
                .resolve_endpoint(endpoint, domain, false, None, None, 0)
                .await?;

            if attempt.info.is_some() {
                if let Some(error) = &attempt.error {
                    debug!(
                        zone = %endpoint.zone,
                        error = %error,
                        "Transport error superseded by a later attempt"
                    );
                }
                return Ok(Resolution {
                    response: attempt.response,
                    info: attempt.info,
                });
            }

            if attempt.response.is_some() {
                last_response = attempt.response;
            }
        }

        Ok(Resolution {
            response: last_response,
            info: None,
        })
    }

    /// Single round-trip against `host`, or the endpoint's own host.
    pub async fn load_response(
        &self,
        endpoint: &TldEndpoint,
        domain: &str,
        strict: bool,
        host: Option<&str>,
    ) -> Result<DomainResponse, DomainError> {
        let host = host.unwrap_or(&endpoint.host);
        let query = endpoint.build_query(domain, strict);
        let text = self.loader.load_text(host, &query).await?;
        Ok(DomainResponse::new(domain, query, text, host))
    }

    fn resolve_endpoint<'a>(
        &'a self,
        endpoint: &'a TldEndpoint,
        domain: &'a str,
        strict: bool,
        host: Option<&'a str>,
        carried: Option<DomainError>,
        hops: usize,
    ) -> BoxFuture<'a, Result<Attempt, DomainError>> {
        async move {
            let target = host.unwrap_or(&endpoint.host);
            let mut current = Attempt {
                error: carried,
                ..Attempt::default()
            };

            match self.load_response(endpoint, domain, strict, Some(target)).await {
                Ok(response) => {
                    current.info = endpoint.parse(&response);
                    debug!(
                        host = %target,
                        strict,
                        parsed = current.info.is_some(),
                        "WHOIS response received"
                    );
                    current.response = Some(response);
                }
                Err(e) => {
                    debug!(host = %target, strict, error = %e, "WHOIS query failed");
                    current.error.get_or_insert(e);
                }
            }

            if current.info.is_none() && !strict {
                let retry = self
                    .resolve_endpoint(endpoint, domain, true, host, current.error.clone(), hops)
                    .await?;
                let escalated = retry.info.is_some();
                current.adopt_if_found(retry);

                // The strict node already chased this result's referral.
                if escalated {
                    return Ok(current);
                }
            }

            if current.info.is_none() && strict && same_host(target, &endpoint.host) {
                if let Some(error) = current.error.take() {
                    return Err(error.into_connection_failure(target));
                }
            }

            let referral = match current.info.as_ref().and_then(DomainInfo::referral_host) {
                Some(referral) => referral.to_string(),
                None => return Ok(current),
            };

            if endpoint.centralized
                || same_host(&referral, target)
                || same_host(&referral, &endpoint.host)
            {
                return Ok(current);
            }

            if hops >= self.max_referral_hops {
                warn!(
                    domain = %domain,
                    referral = %referral,
                    hops,
                    "Referral limit reached, keeping current result"
                );
                return Ok(current);
            }

            debug!(from = %target, to = %referral, "Following referral");
            let followed = self
                .resolve_endpoint(
                    endpoint,
                    domain,
                    false,
                    Some(referral.as_str()),
                    current.error.clone(),
                    hops + 1,
                )
                .await?;
            current.adopt_if_found(followed);

            Ok(current)
        }
        .boxed()
    }
}

fn same_host(a: &str, b: &str) -> bool {
    a.trim_end_matches('.')
        .eq_ignore_ascii_case(b.trim_end_matches('.'))
}
