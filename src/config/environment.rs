use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_MOUNT_PATH: &str = "/users";

/// Server configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub mount_path: String,
    pub upstream_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let mount_path = env::var("USERS_MOUNT_PATH")
            .map(|path| normalize_mount_path(&path))
            .unwrap_or_else(|_| DEFAULT_MOUNT_PATH.to_string());

        let upstream_url = env::var("UPSTREAM_URL")
            .map_err(|_| "UPSTREAM_URL must be set".to_string())?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            bind_addr,
            mount_path,
            upstream_url,
        })
    }
}

/// axum refuses to nest at "/" or at paths without a leading slash.
fn normalize_mount_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_MOUNT_PATH.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
