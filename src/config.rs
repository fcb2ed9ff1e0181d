// src/config.rs
//
// Console configuration, read from the environment (and a `.env` file when
// present).

use std::path::PathBuf;
use std::time::Duration;

use crate::db::default_database_path;
use crate::error::{AppError, AppResult};

pub const BACKEND_URL_VAR: &str = "GYM_CONSOLE_BACKEND_URL";
pub const SECRET_KEY_VAR: &str = "GYM_CONSOLE_SECRET_KEY";
pub const SESSION_DB_VAR: &str = "GYM_CONSOLE_SESSION_DB";
pub const REQUEST_TIMEOUT_VAR: &str = "GYM_CONSOLE_REQUEST_TIMEOUT_SECS";

#[derive(Clone)]
pub struct ConsoleConfig {
    /// Always ends with `/`.
    pub backend_url: String,
    /// Secret the credential codec derives its key from.
    pub secret_key: String,
    pub session_db: PathBuf,
    /// `None` leaves the HTTP client's default in place.
    pub request_timeout: Option<Duration>,
}

impl ConsoleConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend_url = read(BACKEND_URL_VAR)
            .ok_or_else(|| AppError::Config(format!("{} is not set", BACKEND_URL_VAR)))?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "{} must be an http(s) URL, got {}",
                BACKEND_URL_VAR, backend_url
            )));
        }

        let secret_key = read(SECRET_KEY_VAR)
            .ok_or_else(|| AppError::Config(format!("{} is not set", SECRET_KEY_VAR)))?;

        let session_db = match read(SESSION_DB_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let request_timeout = match read(REQUEST_TIMEOUT_VAR) {
            None => None,
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!(
                        "{} must be a whole number of seconds, got {}",
                        REQUEST_TIMEOUT_VAR, raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            backend_url: with_trailing_slash(backend_url),
            secret_key,
            session_db,
            request_timeout,
        })
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

impl std::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("backend_url", &self.backend_url)
            .field("secret_key", &"<redacted>")
            .field("session_db", &self.session_db)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "http://localhost:8080"),
            (SECRET_KEY_VAR, "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "http://localhost:8080/");
        assert!(config.session_db.ends_with("gym-console/session.db"));
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_full_config() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "https://api.gym.example/"),
            (SECRET_KEY_VAR, "s3cret"),
            (SESSION_DB_VAR, "/tmp/console/session.db"),
            (REQUEST_TIMEOUT_VAR, "15"),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "https://api.gym.example/");
        assert_eq!(config.session_db, PathBuf::from("/tmp/console/session.db"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_missing_values_are_config_errors() {
        let missing_url = ConsoleConfig::from_lookup(lookup(&[(SECRET_KEY_VAR, "s")]));
        assert!(matches!(missing_url, Err(AppError::Config(_))));

        let missing_secret =
            ConsoleConfig::from_lookup(lookup(&[(BACKEND_URL_VAR, "http://localhost:8080/")]));
        assert!(matches!(missing_secret, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let bad_timeout = ConsoleConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "http://localhost:8080/"),
            (SECRET_KEY_VAR, "s"),
            (REQUEST_TIMEOUT_VAR, "soon"),
        ]));
        assert!(matches!(bad_timeout, Err(AppError::Config(_))));

        let bad_url = ConsoleConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "localhost:8080"),
            (SECRET_KEY_VAR, "s"),
        ]));
        assert!(matches!(bad_url, Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "http://localhost:8080"),
            (SECRET_KEY_VAR, "s3cret"),
        ]))
        .unwrap();
        assert!(!format!("{:?}", config).contains("s3cret"));
    }
}
