pub mod reload_servers;

pub use reload_servers::ReloadServersUseCase;
