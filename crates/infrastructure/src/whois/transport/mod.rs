pub mod tcp;

pub use tcp::TcpWhoisLoader;
