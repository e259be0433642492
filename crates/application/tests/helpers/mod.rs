#![allow(dead_code)]

mod mock_whois;

pub use mock_whois::*;
