use super::WhoisServices;
use ferrous_whois_application::use_cases::{
    CheckAvailabilityUseCase, GetDomainInfoUseCase, LookupDomainUseCase, ReloadServersUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub check_availability: Arc<CheckAvailabilityUseCase>,
    pub lookup_domain: Arc<LookupDomainUseCase>,
    pub get_domain_info: Arc<GetDomainInfoUseCase>,
    pub reload_servers: Arc<ReloadServersUseCase>,
}

impl UseCases {
    pub fn new(services: &WhoisServices) -> Self {
        Self {
            check_availability: Arc::new(CheckAvailabilityUseCase::new(services.lookup.clone())),
            lookup_domain: Arc::new(LookupDomainUseCase::new(services.lookup.clone())),
            get_domain_info: Arc::new(GetDomainInfoUseCase::new(services.lookup.clone())),
            reload_servers: Arc::new(ReloadServersUseCase::new(
                services.registry.clone(),
                services.parsers.clone(),
            )),
        }
    }
}
