use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub admin_api_keys: String,
    pub convenor_api_keys: String,
    pub class_api_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            admin_api_keys: std::env::var("ADMIN_API_KEYS").unwrap_or_default(),
            convenor_api_keys: std::env::var("CONVENOR_API_KEYS").unwrap_or_default(),
            class_api_keys: std::env::var("CLASS_API_KEYS").unwrap_or_default(),
        })
    }
}
