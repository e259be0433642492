pub mod common;

pub use common::CommonParser;

use ferrous_whois_application::ports::{ParserProvider, ResponseParser};
use ferrous_whois_domain::ParserKind;
use std::sync::Arc;

/// Parser instances shared by every endpoint of the same registry family.
pub struct ParserRegistry {
    common: Arc<CommonParser>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            common: Arc::new(CommonParser::new()),
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserProvider for ParserRegistry {
    fn parser_for(&self, kind: ParserKind) -> Arc<dyn ResponseParser> {
        match kind {
            ParserKind::Common => self.common.clone(),
        }
    }
}
