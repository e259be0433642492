pub mod normalizer;
pub mod parser;
pub mod transport;

pub use normalizer::IdnaNormalizer;
pub use parser::{CommonParser, ParserRegistry};
pub use transport::TcpWhoisLoader;
