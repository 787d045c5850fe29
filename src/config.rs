use std::env;

use crate::{Error, Result};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub bind_host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            supabase_url: required("SUPABASE_URL")?,
            supabase_key: required("SUPABASE_ANON_KEY")?,
            bind_host: env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(env::var("PORT").ok().as_deref()),
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::EnvVarError(format!("{name} not found")))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("3000")), 3000);
        assert_eq!(parse_port(Some("not-a-port")), 8080);
        assert_eq!(parse_port(Some("70000")), 8080);
    }
}
