use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub auth: AuthMode,
    pub max_connections: u32,
    pub log_level: String,
}

/// Whether callers must present a token, and the secret it is signed with.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    Disabled,
    Enabled { jwt_secret: String },
}

impl AuthMode {
    pub fn is_active(&self) -> bool {
        matches!(self, AuthMode::Enabled { .. })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("DASHBOARD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid DASHBOARD_HOST: {e}"))?;

        let port: u16 = env_or("DASHBOARD_PORT", "18081")
            .parse()
            .map_err(|e| format!("Invalid DASHBOARD_PORT: {e}"))?;

        let auth = match parse_flag("DASHBOARD_AUTH", &env_or("DASHBOARD_AUTH", "false"))? {
            true => AuthMode::Enabled {
                jwt_secret: env_required("JWT_SECRET")?,
            },
            false => AuthMode::Disabled,
        };

        let max_connections: u32 = env_or("DASHBOARD_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid DASHBOARD_MAX_CONNECTIONS: {e}"))?;

        let log_level = env_or("DASHBOARD_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            auth,
            max_connections,
            log_level,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(format!("Invalid {key}: expected a boolean, got '{other}'")),
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
