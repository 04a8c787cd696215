use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SUPABASE_URL must be set at build time")]
    MissingUrl,
    #[error("SUPABASE_ANON_KEY must be set at build time")]
    MissingAnonKey,
}

/// Connection parameters for the remote store. Wasm has no process
/// environment, so Trunk bakes these in at compile time from the shell
/// that runs the build. Missing either one is fatal: the site refuses
/// to start rather than render a form that cannot submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = option_env!("SUPABASE_URL")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let anon_key = option_env!("SUPABASE_ANON_KEY")
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingAnonKey)?;

        Ok(Self {
            supabase_url: normalize_base_url(url),
            supabase_anon_key: anon_key.to_string(),
        })
    }
}

/// Endpoint paths are joined onto this with a slash; a trailing one
/// here would produce `//rest/v1/...`.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://proj.supabase.co/"),
            "https://proj.supabase.co"
        );
        assert_eq!(
            normalize_base_url("https://proj.supabase.co"),
            "https://proj.supabase.co"
        );
    }
}
