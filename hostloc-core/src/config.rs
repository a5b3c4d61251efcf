//! Settings: layered configuration (defaults, YAML file, environment, explicit overrides).

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Deserializer, Serialize};

use crate::server_properties::ServerProperties;
use crate::CoreError;

/// Default environment prefix: `HOSTLOC_ZIPKIN__LOCATOR__DISCOVERY__ENABLED=true`.
pub const ENV_PREFIX: &str = "HOSTLOC_";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerProperties,
    pub application: ApplicationProperties,
    pub zipkin: ZipkinProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationProperties {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZipkinProperties {
    pub service: ServiceProperties,
    pub locator: LocatorProperties,
}

/// `zipkin.service.name` overrides the service name any locator reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceProperties {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorProperties {
    pub discovery: DiscoveryProperties,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryProperties {
    pub enabled: bool,
}

/// Optional string setting that also accepts scalars (`name: 1234`, `address=10`),
/// since YAML, env and `--set` values are typed by how they look.
pub(crate) fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        Uint(u64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Scalar>::deserialize(d)?.map(|v| match v {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Uint(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

impl Settings {
    /// `zipkin.locator.discovery.enabled`.
    pub fn discovery_enabled(&self) -> bool {
        self.zipkin.locator.discovery.enabled
    }

    pub fn with_discovery_enabled(mut self, enabled: bool) -> Self {
        self.zipkin.locator.discovery.enabled = enabled;
        self
    }

    /// Explicit `zipkin.service.name`, if any.
    pub fn service_name_override(&self) -> Option<&str> {
        self.zipkin.service.name.as_deref()
    }
}

/// Builds [`Settings`] from layered sources. Later sources win:
/// defaults, then the YAML file, then the environment, then `set` overrides.
pub struct SettingsLoader {
    file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: Vec<(String, serde_json::Value)>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: Some(ENV_PREFIX.to_string()),
            overrides: Vec::new(),
        }
    }

    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read environment variables with this prefix; `__` separates nested keys.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Override one dotted key, e.g. `zipkin.locator.discovery.enabled`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Override from a `key=value` argument. Values `true`/`false` and integers
    /// are typed; anything else is a string.
    pub fn set_arg(self, arg: &str) -> Result<Self, CoreError> {
        let (key, raw) = arg
            .split_once('=')
            .filter(|(k, _)| !k.trim().is_empty())
            .ok_or_else(|| CoreError::InvalidOverride(arg.to_string()))?;
        let value = match raw {
            "true" => serde_json::Value::Bool(true),
            "false" => serde_json::Value::Bool(false),
            _ => match raw.parse::<i64>() {
                Ok(n) => serde_json::Value::from(n),
                Err(_) => serde_json::Value::from(raw),
            },
        };
        Ok(self.set(key.trim(), value))
    }

    pub fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(ref path) = self.file {
            figment = figment.merge(Yaml::file(path));
        }
        if let Some(ref prefix) = self.env_prefix {
            figment = figment.merge(Env::prefixed(prefix).split("__"));
        }
        for (key, value) in &self.overrides {
            figment = figment.merge(Serialized::default(key, value));
        }
        figment
    }

    /// A named settings file must exist; figment alone would skip it.
    pub fn load(&self) -> Result<Settings, CoreError> {
        if let Some(ref path) = self.file {
            if !path.is_file() {
                return Err(CoreError::MissingConfigFile(path.clone()));
            }
        }
        let settings: Settings = self.figment().extract()?;
        tracing::debug!(
            discovery_enabled = settings.discovery_enabled(),
            file = ?self.file,
            "settings loaded"
        );
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
