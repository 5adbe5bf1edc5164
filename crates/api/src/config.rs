use std::fmt::Display;
use std::str::FromStr;

use folio_db::settings::DEFAULT_MAX_CONNECTIONS;
use folio_db::{DbSettings, SslMode};

/// Startup configuration failure. Fatal: the entry point exits on it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err("expected pretty or json".to_string()),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Server-wide request deadline in seconds. No deadline when unset.
    pub request_timeout_secs: Option<u64>,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
    /// Database connection settings.
    pub database: DbSettings,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default        |
    /// |------------------------|----------------|
    /// | `DBUSER`               | required       |
    /// | `DBPASSWORD`           | none           |
    /// | `DBNAME`               | required       |
    /// | `DBHOST`               | required       |
    /// | `DBPORT`               | required       |
    /// | `DBSSL`                | required       |
    /// | `DB_MAX_CONNECTIONS`   | `20`           |
    /// | `HOST`                 | `127.0.0.1`    |
    /// | `PORT`                 | `8080`         |
    /// | `REQUEST_TIMEOUT_SECS` | none           |
    /// | `LOG_FORMAT`           | `pretty`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let database = DbSettings {
            user: env.required("DBUSER")?,
            password: env.optional("DBPASSWORD"),
            database: env.required("DBNAME")?,
            host: env.required("DBHOST")?,
            port: env.required_parsed("DBPORT")?,
            ssl_mode: env.required_parsed::<SslMode>("DBSSL")?,
            max_connections: env
                .optional_parsed("DB_MAX_CONNECTIONS")?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };

        Ok(Self {
            host: env.optional("HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port: env.optional_parsed("PORT")?.unwrap_or(8080),
            request_timeout_secs: env.optional_parsed("REQUEST_TIMEOUT_SECS")?,
            log_format: env.optional_parsed("LOG_FORMAT")?.unwrap_or_default(),
            database,
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Unset and blank values are both treated as absent.
    fn optional(&self, var: &'static str) -> Option<String> {
        (self.lookup)(var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, var: &'static str) -> Result<String, ConfigError> {
        self.optional(var).ok_or(ConfigError::Missing(var))
    }

    fn optional_parsed<T>(&self, var: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.optional(var).map(|raw| parse(var, raw)).transpose()
    }

    fn required_parsed<T>(&self, var: &'static str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        parse(var, self.required(var)?)
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DBUSER", "folio"),
            ("DBNAME", "folio"),
            ("DBHOST", "localhost"),
            ("DBPORT", "5432"),
            ("DBSSL", "disable"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<ServerConfig, ConfigError> {
        ServerConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_apply_when_optional_vars_unset() {
        let config = load(&base_env()).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.database.user, "folio");
        assert_eq!(config.database.password, None);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.ssl_mode, SslMode::Disable);
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn overrides_are_read() {
        let mut env = base_env();
        env.insert("DBPASSWORD", "secret");
        env.insert("DB_MAX_CONNECTIONS", "5");
        env.insert("HOST", "0.0.0.0");
        env.insert("PORT", "9000");
        env.insert("REQUEST_TIMEOUT_SECS", "15");
        env.insert("LOG_FORMAT", "json");

        let config = load(&env).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.database.password.as_deref(), Some("secret"));
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn missing_database_var_is_reported() {
        let mut env = base_env();
        env.remove("DBHOST");

        assert_matches!(load(&env), Err(ConfigError::Missing("DBHOST")));
    }

    #[test]
    fn blank_required_var_counts_as_missing() {
        let mut env = base_env();
        env.insert("DBNAME", "   ");

        assert_matches!(load(&env), Err(ConfigError::Missing("DBNAME")));
    }

    #[test]
    fn non_numeric_port_is_invalid() {
        let mut env = base_env();
        env.insert("DBPORT", "five");

        assert_matches!(
            load(&env),
            Err(ConfigError::Invalid { var: "DBPORT", value, .. }) if value == "five"
        );
    }

    #[test]
    fn unknown_ssl_mode_is_invalid() {
        let mut env = base_env();
        env.insert("DBSSL", "maybe");

        assert_matches!(
            load(&env),
            Err(ConfigError::Invalid { var: "DBSSL", .. })
        );
    }
}
