use crate::{error::config::ConfigError, swapi::DEFAULT_SWAPI_URL};

/// Runtime configuration, read from environment variables.
///
/// | Variable | Required | Default |
/// |----------|----------|---------|
/// | `DATABASE_URL` | yes | |
/// | `SWAPI_URL` | no | `https://swapi.dev/api` |
/// | `USER_AGENT` | no | `swapi-cache/<version>` |
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub swapi_url: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            get("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let swapi_url = get("SWAPI_URL").unwrap_or_else(|| DEFAULT_SWAPI_URL.to_string());
        if !(swapi_url.starts_with("http://") || swapi_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: "SWAPI_URL".to_string(),
                reason: format!("expected an http or https URL, got {:?}", swapi_url),
            });
        }

        let user_agent = get("USER_AGENT")
            .unwrap_or_else(|| format!("swapi-cache/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            database_url,
            swapi_url,
            user_agent,
        })
    }
}
