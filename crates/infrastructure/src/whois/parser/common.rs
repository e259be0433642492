use ferrous_whois_application::ports::ResponseParser;
use ferrous_whois_domain::{DomainInfo, DomainResponse};
use tracing::debug;

/// Matched against the start of a non-comment line only.
const NOT_FOUND_MARKERS: &[&str] = &[
    "no match for",
    "no match!!",
    "not found",
    "domain not found",
    "no data found",
    "no entries found",
    "no object found",
    "no matching record",
    "the queried object does not exist",
    "this domain name has not been registered",
    "status: free",
    "status: available",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    DomainName,
    WhoisServer,
    Registrar,
    CreationDate,
    ExpirationDate,
    UpdatedDate,
    State,
    NameServer,
    Owner,
}

fn field_for(key: &str) -> Option<Field> {
    let field = match key {
        "domain name" | "domain" | "domain_name" | "domainname" => Field::DomainName,
        "registrar whois server" | "whois server" | "whois" | "referralserver"
        | "referral server" => Field::WhoisServer,
        "registrar" | "sponsoring registrar" | "registrar name" | "registrar-name" => {
            Field::Registrar
        }
        "creation date" | "created" | "created on" | "created date" | "registered"
        | "registered on" | "registration time" | "domain registration date" => {
            Field::CreationDate
        }
        "registry expiry date" | "registrar registration expiration date"
        | "expiration date" | "expiry date" | "expires" | "expires on" | "expire"
        | "paid-till" | "renewal date" => Field::ExpirationDate,
        "updated date" | "last updated" | "last modified" | "last-update" | "changed"
        | "modified" => Field::UpdatedDate,
        "domain status" | "status" | "state" => Field::State,
        "name server" | "name servers" | "nameserver" | "nameservers" | "nserver" => {
            Field::NameServer
        }
        "registrant organization" | "registrant" | "registrant name" | "org" | "owner" => {
            Field::Owner
        }
        _ => return None,
    };
    Some(field)
}

/// Generic `Key: value` parser covering gTLD (ICANN) and most ccTLD layouts.
///
/// Sectioned layouts where a key stands alone on its line and the values
/// follow indented (`Name servers:` then one host per line) are supported
/// as well. Scalar fields keep their first occurrence.
#[derive(Debug, Default)]
pub struct CommonParser;

impl CommonParser {
    pub fn new() -> Self {
        Self
    }

    fn is_not_found(text: &str) -> bool {
        text.lines()
            .map(|line| line.trim().to_ascii_lowercase())
            .filter(|line| !line.starts_with('%') && !line.starts_with('#'))
            .any(|line| {
                NOT_FOUND_MARKERS
                    .iter()
                    .any(|marker| line.starts_with(marker))
                    || line.contains("is available for registration")
            })
    }

    fn apply(info: &mut DomainInfo, field: Field, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        match field {
            Field::DomainName => {
                if info.domain_name.is_empty() {
                    info.domain_name = value.trim_end_matches('.').to_ascii_lowercase();
                }
            }
            Field::WhoisServer => {
                if info.whois_server.is_none() {
                    info.whois_server = clean_referral(value);
                }
            }
            Field::Registrar => set_once(&mut info.registrar, value),
            Field::CreationDate => set_once(&mut info.creation_date, value),
            Field::ExpirationDate => set_once(&mut info.expiration_date, value),
            Field::UpdatedDate => set_once(&mut info.updated_date, value),
            Field::Owner => set_once(&mut info.owner, value),
            Field::State => {
                if let Some(state) = value.split_whitespace().next() {
                    push_unique(&mut info.states, state.to_string());
                }
            }
            Field::NameServer => {
                if let Some(ns) = value.split_whitespace().next() {
                    push_unique(
                        &mut info.name_servers,
                        ns.trim_end_matches('.').to_ascii_lowercase(),
                    );
                }
            }
        }
    }
}

impl ResponseParser for CommonParser {
    fn parse(&self, response: &DomainResponse) -> Option<DomainInfo> {
        if response.is_empty() || Self::is_not_found(&response.text) {
            return None;
        }

        let mut info = DomainInfo::default();
        let mut section: Option<Field> = None;

        for line in response.text.lines() {
            if line.trim().is_empty() {
                section = None;
                continue;
            }
            let trimmed = line.trim();
            if trimmed.starts_with('%') || trimmed.starts_with('#') || trimmed.starts_with(">>>") {
                continue;
            }

            let indented = line.starts_with(char::is_whitespace);
            if let (true, Some(field)) = (indented, section) {
                Self::apply(&mut info, field, trimmed);
                continue;
            }

            let Some((key, value)) = trimmed.split_once(':') else {
                section = None;
                continue;
            };

            let key = key.trim().to_ascii_lowercase();
            let field = field_for(&key);
            match (field, value.trim().is_empty()) {
                (Some(field), true) => section = Some(field),
                (Some(field), false) => {
                    section = None;
                    Self::apply(&mut info, field, value);
                }
                (None, _) => section = None,
            }
        }

        if info.domain_name.is_empty() {
            debug!(host = %response.host, domain = %response.domain, "Response carries no domain name");
            return None;
        }

        Some(info)
    }
}

fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Reduces `whois://host`, `rwhois://host:4321/` and similar to `host[:port]`.
fn clean_referral(value: &str) -> Option<String> {
    let without_scheme = value
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(value);
    let host = without_scheme
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches('.');

    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}
