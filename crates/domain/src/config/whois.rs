use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhoisConfig {
    /// Connect, write and read timeout of a single query, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on referral hops followed from one registry
    #[serde(default = "default_max_referral_hops")]
    pub max_referral_hops: usize,

    /// Port used when a host carries no explicit `:port`
    #[serde(default = "default_port")]
    pub default_port: u16,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_referral_hops: default_max_referral_hops(),
            default_port: default_port(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_referral_hops() -> usize {
    3
}

fn default_port() -> u16 {
    43
}
