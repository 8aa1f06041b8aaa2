//! Application settings loaded via OrthoConfig.
//!
//! Every value can come from CLI flags, `CRETACEOUS_*` environment
//! variables, or a configuration file; fields stay optional here and
//! accessors apply the defaults, so precedence is owned entirely by the
//! configuration layer.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Origin of the park's frontend during local development.
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime environment the service believes it is deployed in.
///
/// Only development is special-cased (interactive API docs, no transport
/// enforcement); every other value behaves like production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development: Swagger UI on, HTTPS redirect off.
    Development,
    /// Everything else: docs off, plain HTTP redirected.
    Production,
}

impl Environment {
    /// Whether this is the development environment.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Errors raised while resolving settings into usable values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No connection string was provided.
    #[error("database URL is not configured; set CRETACEOUS_DATABASE_URL")]
    MissingDatabaseUrl,
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    /// The allowed origin does not parse as an absolute URL.
    #[error("invalid allowed origin {value:?}: {source}")]
    InvalidOrigin {
        value: String,
        source: url::ParseError,
    },
    /// The allowed origin is not an HTTP(S) URL with a host.
    #[error("allowed origin {value:?} must be an http or https URL")]
    OriginNotHttp { value: String },
}

/// Configuration values for the service bootstrap.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CRETACEOUS")]
pub struct AppSettings {
    /// PostgreSQL connection string. Required; there is no fallback.
    pub database_url: Option<String>,
    /// Runtime environment name; anything but "development" means
    /// production behaviour.
    pub environment: Option<String>,
    /// Single browser origin allowed by the CORS policy.
    pub allowed_origin: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
}

impl AppSettings {
    /// Return the connection string or fail because it is missing.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Resolve the runtime environment, defaulting to production.
    pub fn environment(&self) -> Environment {
        match self.environment.as_deref() {
            Some(value) if value.trim().eq_ignore_ascii_case("development") => {
                Environment::Development
            }
            _ => Environment::Production,
        }
    }

    /// Return the validated CORS origin, falling back to the default.
    pub fn allowed_origin(&self) -> Result<&str, SettingsError> {
        let origin = self
            .allowed_origin
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN);
        let parsed = Url::parse(origin).map_err(|source| SettingsError::InvalidOrigin {
            value: origin.to_owned(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(SettingsError::OriginNotHttp {
                value: origin.to_owned(),
            });
        }
        Ok(origin)
    }

    /// Parse the bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and fallback behaviour.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("cretaceous-api")])
            .expect("settings should load")
    }

    fn clean_env() -> Vec<(&'static str, Option<String>)> {
        vec![
            ("CRETACEOUS_DATABASE_URL", None),
            ("CRETACEOUS_ENVIRONMENT", None),
            ("CRETACEOUS_ALLOWED_ORIGIN", None),
            ("CRETACEOUS_BIND_ADDR", None),
        ]
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(clean_env());

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), Err(SettingsError::MissingDatabaseUrl));
        assert_eq!(settings.environment(), Environment::Production);
        assert_eq!(settings.allowed_origin(), Ok(DEFAULT_ALLOWED_ORIGIN));
        assert_eq!(
            settings.bind_addr().expect("default addr parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("literal")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let mut env = clean_env();
        env[0].1 = Some("postgres://park:park@db/cretaceous".to_owned());
        env[1].1 = Some("Development".to_owned());
        env[2].1 = Some("https://park.example".to_owned());
        env[3].1 = Some("127.0.0.1:9000".to_owned());
        let _guard = lock_env(env);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Ok("postgres://park:park@db/cretaceous")
        );
        assert_eq!(settings.environment(), Environment::Development);
        assert_eq!(settings.allowed_origin(), Ok("https://park.example"));
        assert_eq!(
            settings.bind_addr().expect("addr parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal")
        );
    }

    #[rstest]
    #[case(Some("development"), Environment::Development)]
    #[case(Some("DEVELOPMENT"), Environment::Development)]
    #[case(Some("staging"), Environment::Production)]
    #[case(Some("production"), Environment::Production)]
    #[case(None, Environment::Production)]
    fn unknown_environments_behave_like_production(
        #[case] value: Option<&str>,
        #[case] expected: Environment,
    ) {
        let settings = AppSettings {
            database_url: None,
            environment: value.map(str::to_owned),
            allowed_origin: None,
            bind_addr: None,
        };
        assert_eq!(settings.environment(), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://park.example")]
    fn invalid_origins_are_rejected(#[case] origin: &str) {
        let settings = AppSettings {
            database_url: None,
            environment: None,
            allowed_origin: Some(origin.to_owned()),
            bind_addr: None,
        };
        assert!(settings.allowed_origin().is_err());
    }

    #[rstest]
    fn invalid_bind_addr_is_rejected() {
        let settings = AppSettings {
            database_url: None,
            environment: None,
            allowed_origin: None,
            bind_addr: Some("eight-thousand".to_owned()),
        };
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidBindAddr { .. })
        ));
    }
}
