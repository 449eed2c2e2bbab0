use std::net::SocketAddr;

/// Connection settings for the external generative model.
#[derive(Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model used for the per-chunk pass.
    pub chunk_model: String,
    /// Model used for the final synthesis pass.
    pub synthesis_model: String,
    /// Per-call timeout. `None` leaves the HTTP client's default in place.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("chunk_model", &self.chunk_model)
            .field("synthesis_model", &self.synthesis_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub max_body_bytes: usize,
    pub model: ModelConfig,
}
