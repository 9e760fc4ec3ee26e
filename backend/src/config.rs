use crate::error::ServerError;
use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use url::Url;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_APP_URL: &str = "https://scamcheck.app";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Public origin used for sitemap and robots links, without a trailing slash.
    pub app_url: String,
    pub frontend_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ServerError> {
        let app_url: Url = try_load("APP_URL", DEFAULT_APP_URL)?;

        Ok(Self {
            port: try_load("PORT", DEFAULT_PORT)?,
            app_url: app_url.as_str().trim_end_matches('/').to_string(),
            frontend_dir: env::var("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_frontend_dir()),
        })
    }
}

fn default_frontend_dir() -> PathBuf {
    let dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(manifest_dir) => PathBuf::from(manifest_dir).join("../frontend/dist"),
        Err(_) => PathBuf::from("/usr/src/app/frontend/dist"),
    };
    log::info!("FRONTEND_DIR not set, using default: {}", dir.display());
    dir
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ServerError>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            log::info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ServerError::Config {
            key,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_default() {
        let port: u16 = try_load("SCAMCHECK_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn reports_bad_default_as_config_error() {
        let err = try_load::<u16>("SCAMCHECK_TEST_UNSET_PORT", "eighty").unwrap_err();
        assert!(err.to_string().starts_with("Invalid SCAMCHECK_TEST_UNSET_PORT value"));
    }
}
