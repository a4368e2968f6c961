use anyhow::Context;
use std::env;

const DEFAULT_DATABASE_URL: &str = "comments.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("Invalid PORT: {}", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            production: lookup("ENVIRONMENT").map_or(false, |e| e == "production"),
        })
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    pub fn default_log_level(&self) -> &'static str {
        if self.production {
            "info"
        } else {
            "debug"
        }
    }
}
