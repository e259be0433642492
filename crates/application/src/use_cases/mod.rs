pub mod domains;
pub mod servers;

pub use domains::{CheckAvailabilityUseCase, GetDomainInfoUseCase, LookupDomainUseCase};
pub use servers::ReloadServersUseCase;
