pub mod domain_lookup;
pub mod endpoint;
pub mod endpoint_set;
pub mod referral_resolver;
pub mod server_registry;

pub use domain_lookup::DomainLookupService;
pub use endpoint::{build_endpoints, TldEndpoint};
pub use endpoint_set::EndpointSet;
pub use referral_resolver::{ReferralResolver, Resolution, DEFAULT_MAX_REFERRAL_HOPS};
pub use server_registry::TldServerRegistry;
