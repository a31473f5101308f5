//! Layered configuration loading.
//!
//! Precedence, lowest to highest:
//! 1. `Default` of the target type
//! 2. YAML file (when a path is given)
//! 3. flat legacy environment variables (per-binary alias table)
//! 4. `APP__SECTION__KEY` environment variables
//!
//! CLI overrides are applied by the binaries on the loaded value.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Prefix of structured environment overrides, e.g. `APP__SERVER__PORT`.
pub const ENV_PREFIX: &str = "APP__";

/// Configuration error.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {path}")]
    MissingFile { path: String },
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
    #[error("failed to render configuration: {0}")]
    Render(String),
}

/// Deployment environment. Anything other than `production` is treated as
/// development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    #[serde(other)]
    Development,
}

impl Environment {
    /// Whether internal error detail may be included in responses.
    #[must_use]
    pub fn expose_error_detail(self) -> bool {
        self != Self::Production
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

impl ServerConfig {
    #[must_use]
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            environment: Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings. `RUST_LOG`, when set, takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Load `T` from defaults, an optional YAML file and the environment.
///
/// `aliases` maps flat environment variable names (matched
/// case-insensitively) onto dotted config paths, e.g.
/// `("LOGIN_USERNAME", "login.username")`.
///
/// # Errors
/// Returns [`ConfigError::MissingFile`] if `path` is given but is not a file,
/// or [`ConfigError::Invalid`] if the merged sources do not deserialize.
pub fn load_layered<T>(
    path: Option<&Path>,
    aliases: &'static [(&'static str, &'static str)],
) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Serialize + Default,
{
    let mut figment = Figment::from(Serialized::defaults(T::default()));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                path: path.to_string_lossy().into_owned(),
            });
        }
        figment = figment.merge(Yaml::file(path));
    }

    let legacy = Env::raw().filter_map(move |key| {
        aliases
            .iter()
            .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
            .map(|(_, target)| (*target).into())
    });
    figment = merge_env_as_strings(figment, &legacy);
    figment = merge_env_as_strings(figment, &Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract_lossy()
        .map_err(|e| ConfigError::Invalid(Box::new(e)))
}

/// Environment values stay strings (`LOGIN_PASSWORD=123456` is a password,
/// not a number); numeric and boolean fields are coerced at extraction.
fn merge_env_as_strings(mut figment: Figment, env: &Env) -> Figment {
    for (key, value) in env.iter() {
        figment = figment.merge(Serialized::default(key.as_str(), value));
    }
    figment
}

/// Render a configuration value as YAML (for `check` / `--print-config`).
///
/// # Errors
/// Returns [`ConfigError::Render`] if the value cannot be serialized.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, ConfigError> {
    serde_saphyr::to_string(value).map_err(|e| ConfigError::Render(e.to_string()))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct TestConfig {
        server: ServerConfig,
        logging: LoggingConfig,
        login: TestLogin,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct TestLogin {
        username: String,
        password: String,
        enabled: bool,
    }

    impl Default for TestLogin {
        fn default() -> Self {
            Self {
                username: "admin".to_owned(),
                password: "secret123".to_owned(),
                enabled: false,
            }
        }
    }

    const ALIASES: &[(&str, &str)] = &[
        ("LOGIN_USERNAME", "login.username"),
        ("LOGIN_PASSWORD", "login.password"),
        ("PORT", "server.port"),
    ];

    fn clean_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> = vec![
            ("LOGIN_USERNAME", None),
            ("LOGIN_PASSWORD", None),
            ("PORT", None),
            ("APP__LOGIN__USERNAME", None),
            ("APP__LOGIN__PASSWORD", None),
            ("APP__LOGIN__ENABLED", None),
            ("APP__SERVER__PORT", None),
            ("APP__SERVER__ENVIRONMENT", None),
        ];
        for (k, v) in vars {
            all.retain(|(name, _)| name != k);
            all.push((k, *v));
        }
        temp_env::with_vars(all, f);
    }

    #[test]
    fn defaults_apply_without_sources() {
        clean_env(&[], || {
            let cfg: TestConfig = load_layered(None, ALIASES).unwrap();
            assert_eq!(cfg.server.port, 8080);
            assert_eq!(cfg.login.username, "admin");
            assert_eq!(cfg.logging.format, LogFormat::Text);
        });
    }

    #[test]
    fn yaml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 9000\nlogging:\n  format: json").unwrap();

        clean_env(&[], || {
            let cfg: TestConfig = load_layered(Some(file.path()), ALIASES).unwrap();
            assert_eq!(cfg.server.port, 9000);
            assert_eq!(cfg.logging.format, LogFormat::Json);
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_layered::<TestConfig>(Some(Path::new("/nonexistent/cfg.yaml")), ALIASES)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }

    #[test]
    fn legacy_alias_is_honoured() {
        clean_env(&[("LOGIN_USERNAME", Some("operator")), ("PORT", Some("3100"))], || {
            let cfg: TestConfig = load_layered(None, ALIASES).unwrap();
            assert_eq!(cfg.login.username, "operator");
            assert_eq!(cfg.server.port, 3100);
        });
    }

    #[test]
    fn numeric_looking_values_stay_strings() {
        clean_env(
            &[("LOGIN_USERNAME", Some("007")), ("LOGIN_PASSWORD", Some("123456"))],
            || {
                let cfg: TestConfig = load_layered(None, ALIASES).unwrap();
                assert_eq!(cfg.login.username, "007");
                assert_eq!(cfg.login.password, "123456");
            },
        );
        clean_env(&[("APP__LOGIN__PASSWORD", Some("42"))], || {
            let cfg: TestConfig = load_layered(None, ALIASES).unwrap();
            assert_eq!(cfg.login.password, "42");
        });
    }

    #[test]
    fn typed_fields_still_coerce_from_env() {
        clean_env(
            &[("APP__SERVER__PORT", Some("9100")), ("APP__LOGIN__ENABLED", Some("true"))],
            || {
                let cfg: TestConfig = load_layered(None, ALIASES).unwrap();
                assert_eq!(cfg.server.port, 9100);
                assert!(cfg.login.enabled);
            },
        );
    }

    #[test]
    fn prefixed_env_wins_over_alias() {
        clean_env(
            &[
                ("LOGIN_USERNAME", Some("operator")),
                ("APP__LOGIN__USERNAME", Some("root")),
            ],
            || {
                let cfg: TestConfig = load_layered(None, ALIASES).unwrap();
                assert_eq!(cfg.login.username, "root");
            },
        );
    }

    #[test]
    fn unknown_environment_is_development() {
        clean_env(&[("APP__SERVER__ENVIRONMENT", Some("staging"))], || {
            let cfg: TestConfig = load_layered(None, ALIASES).unwrap();
            assert_eq!(cfg.server.environment, Environment::Development);
            assert!(cfg.server.environment.expose_error_detail());
        });
    }

    #[test]
    fn production_hides_detail() {
        assert!(!Environment::Production.expose_error_detail());
    }
}
