use super::{cors_config, error::ConfigError, openai_config::OpenAIConfig, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub openai: OpenAIConfig,
}

impl AppConfig {
    /// Fails when a required variable is missing so the process never
    /// starts serving requests that cannot reach the provider.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            openai: OpenAIConfig::from_env()?,
        })
    }
}
