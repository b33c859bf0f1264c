/// Startup configuration failures. Raised before the listener is bound.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0} must be set")]
    MissingVariable(&'static str),
    #[error("config.invalid_variable: {name}={value}")]
    InvalidVariable { name: &'static str, value: String },
}
