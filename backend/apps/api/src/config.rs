//! Process configuration read from the environment

use std::time::Duration;

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_SESSION_SWEEP_SECS: u64 = 300;

/// Administrator created at startup when absent
pub struct AdminBootstrap {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub password_pepper: Option<Vec<u8>>,
    pub admin: Option<AdminBootstrap>,
    /// Period of the expired-session sweep
    pub session_sweep_interval: Duration,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match get("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let password_pepper = get("PASSWORD_PEPPER")
            .map(|raw| {
                general_purpose::STANDARD
                    .decode(raw.trim())
                    .context("PASSWORD_PEPPER must be base64")
            })
            .transpose()?;

        let admin = match (get("ADMIN_NAME"), get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(name), Some(email), Some(password)) => Some(AdminBootstrap {
                name,
                email,
                password,
            }),
            (None, None, None) => None,
            _ => bail!("ADMIN_NAME, ADMIN_EMAIL and ADMIN_PASSWORD must be set together"),
        };

        let sweep_secs = match get("SESSION_SWEEP_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .with_context(|| format!("SESSION_SWEEP_SECS must be a positive number: {raw}"))?,
            None => DEFAULT_SESSION_SWEEP_SECS,
        };

        Ok(Self {
            database_url,
            port,
            database_max_connections,
            frontend_origins,
            password_pepper,
            admin,
            session_sweep_interval: Duration::from_secs(sweep_secs),
        })
    }
}

/// Accepts `8080` as well as `:8080`
fn parse_port(raw: &str) -> anyhow::Result<u16> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(':').unwrap_or(trimmed);
    digits
        .parse()
        .with_context(|| format!("PORT is not a valid port: {raw}"))
}
