use crate::roi::{RoiScenario, UnknownScenario};
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const ENV_APP_ENV: &str = "APP_ENV";
const ENV_HOST: &str = "APP_HOST";
const ENV_PORT: &str = "APP_PORT";
const ENV_LOG_LEVEL: &str = "APP_LOG_LEVEL";
const ENV_DEMO_MODE: &str = "DEMO_MODE";
const ENV_DEFAULT_SCENARIO: &str = "APP_DEFAULT_SCENARIO";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Settings for the portal service, read from `.env` and the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub portal: PortalConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = read_var(ENV_APP_ENV)
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or(AppEnvironment::Development);

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig::from_env(),
            portal: PortalConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = read_var(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read_var(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Bind address; `localhost` maps to the IPv4 loopback.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost {
                    value: self.host.clone(),
                    source,
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl TelemetryConfig {
    fn from_env() -> Self {
        Self {
            log_level: read_var(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Serve the demo assessment; only the literal `false` turns it off.
    pub demo_mode: bool,
    /// Scenario applied when an ROI request names none.
    pub default_scenario: RoiScenario,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            demo_mode: true,
            default_scenario: RoiScenario::default(),
        }
    }
}

impl PortalConfig {
    /// Portal settings alone, for commands that never bind a server.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    fn from_env() -> Result<Self, ConfigError> {
        let demo_mode = read_var(ENV_DEMO_MODE).map_or(true, |value| value != "false");
        let default_scenario = read_var(ENV_DEFAULT_SCENARIO)
            .map(|value| value.parse::<RoiScenario>())
            .transpose()
            .map_err(|source| ConfigError::InvalidScenario { source })?
            .unwrap_or_default();

        Ok(Self {
            demo_mode,
            default_scenario,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    InvalidScenario {
        source: UnknownScenario,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "{ENV_PORT}='{value}' is not a port number")
            }
            ConfigError::InvalidHost { value, .. } => {
                write!(f, "{ENV_HOST}='{value}' is not an IP address or localhost")
            }
            ConfigError::InvalidScenario { source } => {
                write!(f, "{ENV_DEFAULT_SCENARIO} is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } => None,
            ConfigError::InvalidHost { source, .. } => Some(source),
            ConfigError::InvalidScenario { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    const ALL_VARS: [&str; 6] = [
        ENV_APP_ENV,
        ENV_HOST,
        ENV_PORT,
        ENV_LOG_LEVEL,
        ENV_DEMO_MODE,
        ENV_DEFAULT_SCENARIO,
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    /// Holds the env lock with every portal variable cleared.
    fn clean_env() -> MutexGuard<'static, ()> {
        let guard = env_guard()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for name in ALL_VARS {
            env::remove_var(name);
        }
        guard
    }

    #[test]
    fn defaults_apply_without_environment() {
        let _env = clean_env();

        let config = AppConfig::load().expect("defaults load");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.portal.demo_mode);
        assert_eq!(config.portal.default_scenario, RoiScenario::Expected);
    }

    #[test]
    fn environment_names_are_normalized() {
        assert_eq!(AppEnvironment::parse(" PROD "), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse("ci"), AppEnvironment::Test);
        assert_eq!(AppEnvironment::parse("staging"), AppEnvironment::Development);
    }

    #[test]
    fn localhost_binds_loopback() {
        let _env = clean_env();
        env::set_var(ENV_HOST, "localhost");
        env::set_var(ENV_PORT, "8088");

        let addr = AppConfig::load()
            .expect("config loads")
            .server
            .socket_addr()
            .expect("localhost resolves");

        assert_eq!(addr, SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8088));
        env::remove_var(ENV_HOST);
        env::remove_var(ENV_PORT);
    }

    #[test]
    fn hostname_other_than_localhost_is_rejected() {
        let server = ServerConfig {
            host: "portal.internal".to_string(),
            port: 3000,
        };

        let err = server.socket_addr().expect_err("not an ip");
        assert_eq!(
            err.to_string(),
            "APP_HOST='portal.internal' is not an IP address or localhost"
        );
    }

    #[test]
    fn demo_mode_only_disabled_by_exact_false() {
        let _env = clean_env();
        env::set_var(ENV_DEMO_MODE, "false");
        assert!(!AppConfig::load().expect("config loads").portal.demo_mode);

        env::set_var(ENV_DEMO_MODE, "0");
        assert!(AppConfig::load().expect("config loads").portal.demo_mode);
        env::remove_var(ENV_DEMO_MODE);
    }

    #[test]
    fn default_scenario_is_parsed() {
        let _env = clean_env();
        env::set_var(ENV_DEFAULT_SCENARIO, "bullish");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidScenario { .. })
        ));

        env::set_var(ENV_DEFAULT_SCENARIO, "Optimistic");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.portal.default_scenario, RoiScenario::Optimistic);
        env::remove_var(ENV_DEFAULT_SCENARIO);
    }

    #[test]
    fn portal_settings_load_without_server_settings() {
        let _env = clean_env();
        env::set_var(ENV_PORT, "not-a-port");
        env::set_var(ENV_DEFAULT_SCENARIO, "pessimistic");

        let portal = PortalConfig::load().expect("portal settings load");

        assert_eq!(portal.default_scenario, RoiScenario::Pessimistic);
        assert!(portal.demo_mode);
        env::remove_var(ENV_PORT);
        env::remove_var(ENV_DEFAULT_SCENARIO);
    }

    #[test]
    fn unparseable_port_is_reported() {
        let _env = clean_env();
        env::set_var(ENV_PORT, "not-a-port");

        let err = AppConfig::load().expect_err("port is rejected");

        assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "not-a-port"));
        env::remove_var(ENV_PORT);
    }
}
