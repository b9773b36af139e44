//! Environment-driven configuration, read once at startup.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl AppConfig {
    /// `DATABASE_URL` and `JWT_SECRET` are required; everything else
    /// falls back to a default. Unparseable numeric values also fall
    /// back rather than failing startup.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "greensteps".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "greensteps-users".into()),
            access_ttl_minutes: parse_or(std::env::var("JWT_TTL_MINUTES").ok(), 60),
            refresh_ttl_minutes: parse_or(
                std::env::var("JWT_REFRESH_TTL_MINUTES").ok(),
                60 * 24 * 14,
            ),
        };
        Ok(Self { database_url, jwt })
    }
}
