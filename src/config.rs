use std::env;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_MBR_URL: &str = "http://127.0.0.1:3000/api";
pub const DEFAULT_MUN_URL: &str = "http://127.0.0.1:3000/v1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub mbr_url: String,
    pub mun_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match var("INSINC_PORT") {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("INSINC_PORT is not a valid port: {p}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            database_url: var("DATABASE_URL").ok_or(anyhow!("DATABASE_URL not set"))?,
            mbr_url: var("INSINC_MBR_URL").unwrap_or_else(|| DEFAULT_MBR_URL.into()),
            mun_url: var("INSINC_MUN_URL").unwrap_or_else(|| DEFAULT_MUN_URL.into()),
            host: var("INSINC_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
        })
    }
}
