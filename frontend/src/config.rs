/// Build-time configuration. Values are baked into the WASM bundle by
/// `trunk build` from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: &'static str,
    pub app_url: &'static str,
}

const DEFAULT_API_URL: &str = "https://api.scamcheck.app";
const DEFAULT_APP_URL: &str = "https://scamcheck.app";

impl AppConfig {
    pub fn load() -> Self {
        Self {
            api_url: option_env!("PUBLIC_API_URL").unwrap_or(DEFAULT_API_URL),
            app_url: option_env!("PUBLIC_APP_URL").unwrap_or(DEFAULT_APP_URL),
        }
    }

    /// Shareable Open-Graph image for a result.
    pub fn og_image_url(&self, title: &str, variant: &str) -> String {
        format!(
            "{}/api/og?title={}&variant={}",
            self.app_url.trim_end_matches('/'),
            urlencoding::encode(title),
            variant
        )
    }
}
