use std::time::Duration;

use hearth_llm::openai;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub provider_timeout: Duration,
    pub session_ttl_hours: i64,
    pub session_sweep_secs: u64,
}

impl Config {
    /// Reads configuration from the environment (after `.env` loading).
    /// Everything except the API key has a workable default.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HEARTH_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("HEARTH_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()?;
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_base_url = std::env::var("HEARTH_OPENAI_BASE_URL")
            .unwrap_or_else(|_| openai::DEFAULT_BASE_URL.into());
        let openai_model =
            std::env::var("HEARTH_OPENAI_MODEL").unwrap_or_else(|_| openai::DEFAULT_MODEL.into());
        let provider_timeout_secs: u64 = std::env::var("HEARTH_PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()?;
        let session_ttl_hours: i64 = std::env::var("HEARTH_SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".into())
            .parse()?;
        let session_sweep_secs: u64 = std::env::var("HEARTH_SESSION_SWEEP_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()?;

        Ok(Self {
            host,
            port,
            openai_api_key,
            openai_base_url,
            openai_model,
            provider_timeout: Duration::from_secs(provider_timeout_secs),
            session_ttl_hours,
            session_sweep_secs,
        })
    }
}
