mod use_cases;
mod whois;

pub use use_cases::UseCases;
pub use whois::WhoisServices;
