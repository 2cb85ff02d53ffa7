use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `MURMUR_*` variables from the environment (after `.env`).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let db_path = lookup("MURMUR_DB_PATH").unwrap_or_else(|| "murmur.db".into());
        let host = lookup("MURMUR_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("MURMUR_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MURMUR_PORT is not a valid port: {raw}"))?,
            None => 8080,
        };

        Ok(Self {
            db_path: db_path.into(),
            host,
            port,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
