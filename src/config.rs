use std::env;

use crate::documents::resolution::TenantMatchPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    pub tenant_match_policy: TenantMatchPolicy,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "127.0.0.1"),
            port: env_parse_or("PORT", 3000),
            database_path: env_or("DATABASE_PATH", "lease_documents.sqlite3"),
            schema_path: env_or("SCHEMA_PATH", "sql/schema.sql"),
            max_workers: env_parse_or("MAX_WORKERS", 8),
            tenant_match_policy: TenantMatchPolicy::from_env(env_opt("TENANT_MATCH_POLICY")),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TenantMatchPolicy {
    fn from_env(value: Option<String>) -> Self {
        match value
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "first" => Self::First,
            _ => Self::MostRecent,
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    env_opt(key)
        .and_then(|raw| raw.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_policy_defaults_to_most_recent() {
        assert_eq!(TenantMatchPolicy::from_env(None), TenantMatchPolicy::MostRecent);
        assert_eq!(
            TenantMatchPolicy::from_env(Some("bogus".into())),
            TenantMatchPolicy::MostRecent
        );
        assert_eq!(
            TenantMatchPolicy::from_env(Some(" First ".into())),
            TenantMatchPolicy::First
        );
    }
}
