use std::env;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub bind_addr: String,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("SHRIKE_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        }
    }
}
