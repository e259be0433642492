pub mod errors;
pub mod logging;
pub mod root;
pub mod servers;
pub mod whois;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use servers::default_servers;
pub use whois::WhoisConfig;
