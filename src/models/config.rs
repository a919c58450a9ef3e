//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Default JSON body limit: large enough for a full batch of images.
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 20 * 1024 * 1024;

fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}

#[derive(Clone, Debug, Deserialize)]
/// Server settings read from `config/*.yaml` and `APP_*` variables.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound for JSON request bodies, in bytes.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}
