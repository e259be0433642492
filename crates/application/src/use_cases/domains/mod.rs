pub mod check_availability;
pub mod get_domain_info;
pub mod lookup_domain;

pub use check_availability::CheckAvailabilityUseCase;
pub use get_domain_info::GetDomainInfoUseCase;
pub use lookup_domain::LookupDomainUseCase;
