use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Facts about the agency itself, quoted by the chatbot.
#[derive(Debug, Clone)]
pub struct AgencyProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hours: String,
}

impl Default for AgencyProfile {
    fn default() -> Self {
        Self {
            name: "Northwind Digital".to_string(),
            email: "hello@northwind.digital".to_string(),
            phone: "+1 (555) 014-2290".to_string(),
            hours: "Monday to Friday, 9:00 AM - 6:00 PM (EST)".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub connect_retries: u32,
    pub retry_base: Duration,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Overrides the public Gemini endpoint, e.g. for a proxy or gateway.
    pub base_url: Option<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub ai: AiConfig,
    pub allowed_origins: Vec<String>,
    pub session_secret: Option<String>,
    pub static_dir: PathBuf,
    pub agency: AgencyProfile,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = AgencyProfile::default();

        let database_url = env_opt("DATABASE_URL").or_else(|| env_opt("MONGODB_URI"));

        let config = Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", DEFAULT_PORT)?,
            environment: Environment::parse(&env_or("APP_ENV", "development")),
            database: DatabaseConfig {
                url: database_url,
                connect_retries: env_parse("DB_CONNECT_RETRIES", 5)?,
                retry_base: Duration::from_millis(env_parse("DB_RETRY_BASE_MS", 1000)?),
            },
            ai: AiConfig {
                api_key: env_opt("GEMINI_API_KEY"),
                model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                base_url: env_opt("GEMINI_BASE_URL"),
                request_timeout: Duration::from_secs(env_parse("AI_REQUEST_TIMEOUT_SECS", 120)?),
            },
            allowed_origins: parse_origins(&env_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGIN)),
            session_secret: env_opt("SESSION_SECRET"),
            static_dir: PathBuf::from(env_or("STATIC_DIR", "./static")),
            agency: AgencyProfile {
                name: env_or("AGENCY_NAME", &defaults.name),
                email: env_or("AGENCY_EMAIL", &defaults.email),
                phone: env_or("AGENCY_PHONE", &defaults.phone),
                hours: defaults.hours,
            },
        };

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Returns the variable only when it is set to a non-blank value.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env_opt(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_normalised() {
        let origins = parse_origins("https://a.example/, http://localhost:3000 ,,");
        assert_eq!(origins, vec!["https://a.example", "http://localhost:3000"]);
    }

    #[test]
    fn unknown_environment_is_development() {
        assert_eq!(Environment::parse("staging"), Environment::Development);
        assert!(Environment::parse("Production").is_production());
    }
}
