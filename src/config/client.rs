use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Settings for the registration form's backend connection.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        env::var("API_BASE_URL")
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn register_url(&self) -> String {
        format!("{}/users/register", self.api_base_url)
    }
}
