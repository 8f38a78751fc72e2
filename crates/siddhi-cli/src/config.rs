//! Layered CLI configuration.
//!
//! Resolution order, lowest first: built-in defaults, a JSON settings file,
//! then flags and `SIDDHI_*` environment variables. The resolved
//! [`CliConfig`] is handed to bootstrap; nothing else reads the environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use siddhi_api::{Credentials, DEFAULT_APPS_HOST, DEFAULT_QUERY_HOST, SiddhiClientConfig};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Settings file looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "siddhi.json";

/// Contents of a JSON settings file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsFile {
    pub apps_host: Option<String>,
    pub query_host: Option<String>,
    pub authorization: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub accept_invalid_certs: Option<bool>,
}

/// Values taken from flags and environment variables.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub scan_dir: Option<PathBuf>,
    pub apps_host: Option<String>,
    pub query_host: Option<String>,
    pub authorization: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Only ever turns certificate checks off; never back on.
    pub accept_invalid_certs: bool,
}

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub apps_host: String,
    pub query_host: String,
    pub credentials: Option<Credentials>,
    pub accept_invalid_certs: bool,
    /// Folder scanned for app files; the working directory when `None`.
    pub scan_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            apps_host: DEFAULT_APPS_HOST.to_string(),
            query_host: DEFAULT_QUERY_HOST.to_string(),
            credentials: None,
            accept_invalid_certs: false,
            scan_dir: None,
        }
    }
}

impl CliConfig {
    /// Resolve the configuration, searching the default settings locations.
    pub fn resolve(overrides: &ConfigOverrides) -> CliResult<Self> {
        let settings = match &overrides.config_path {
            Some(path) => Some(load_settings(path)?),
            None => find_settings_file(&default_settings_paths())
                .map(|path| load_settings(&path))
                .transpose()?,
        };
        Self::from_layers(settings.as_ref(), overrides)
    }

    /// Merge a settings file and overrides on top of the defaults.
    ///
    /// Host values override field by field. Credentials override as a unit:
    /// the highest layer that names any credential supplies all of them.
    pub fn from_layers(
        settings: Option<&SettingsFile>,
        overrides: &ConfigOverrides,
    ) -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(settings) = settings {
            if let Some(host) = &settings.apps_host {
                config.apps_host.clone_from(host);
            }
            if let Some(host) = &settings.query_host {
                config.query_host.clone_from(host);
            }
            if let Some(credentials) = credentials_from(
                settings.authorization.as_deref(),
                settings.username.as_deref(),
                settings.password.as_deref(),
            )? {
                config.credentials = Some(credentials);
            }
            config.accept_invalid_certs = settings.accept_invalid_certs.unwrap_or(false);
        }

        if let Some(host) = &overrides.apps_host {
            config.apps_host.clone_from(host);
        }
        if let Some(host) = &overrides.query_host {
            config.query_host.clone_from(host);
        }
        if let Some(credentials) = credentials_from(
            overrides.authorization.as_deref(),
            overrides.username.as_deref(),
            overrides.password.as_deref(),
        )? {
            config.credentials = Some(credentials);
        }
        config.accept_invalid_certs |= overrides.accept_invalid_certs;
        config.scan_dir.clone_from(&overrides.scan_dir);

        Ok(config)
    }

    /// Client configuration for the remote API.
    pub fn client_config(&self) -> SiddhiClientConfig {
        SiddhiClientConfig::new()
            .with_apps_host(&self.apps_host)
            .with_query_host(&self.query_host)
            .with_optional_credentials(self.credentials.clone())
            .with_accept_invalid_certs(self.accept_invalid_certs)
            .with_user_agent(concat!("siddhi-cli/", env!("CARGO_PKG_VERSION")))
    }
}

/// Build credentials from one layer's values.
///
/// A token wins over a user name. A password without a user name is a
/// configuration error.
fn credentials_from(
    authorization: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> CliResult<Option<Credentials>> {
    if let Some(token) = non_empty(authorization) {
        return Ok(Some(Credentials::Token(token.to_string())));
    }
    match (non_empty(username), password) {
        (Some(username), password) => Ok(Some(Credentials::UserPassword {
            username: username.to_string(),
            password: password.unwrap_or_default().to_string(),
        })),
        (None, Some(password)) if !password.is_empty() => Err(CliError::Config(
            "a password was given without a username".to_string(),
        )),
        (None, _) => Ok(None),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Candidate settings files, in lookup order.
pub fn default_settings_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_SETTINGS_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("siddhi").join("config.json"));
    }
    paths
}

/// First candidate that exists as a file.
pub fn find_settings_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> CliResult<SettingsFile> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
    let settings = serde_json::from_str(&text)
        .map_err(|e| CliError::Config(format!("invalid settings in {}: {e}", path.display())))?;
    debug!(path = %path.display(), "loaded settings file");
    Ok(settings)
}
