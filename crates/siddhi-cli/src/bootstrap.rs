//! CLI bootstrap - the composition root.
//!
//! The only place where concrete adapters are chosen: the reqwest-backed
//! Siddhi client for the registry port and the directory scanner for the
//! files port. Handlers only see the composed [`CliContext`].

use std::sync::Arc;

use siddhi_api::DefaultSiddhiClient;
use siddhi_core::{AppFilesPort, AppRegistryPort, AppsService, CoreError, DirectoryAppFiles};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    apps: AppsService,
}

impl CliContext {
    /// Access the app operations service.
    pub const fn apps(&self) -> &AppsService {
        &self.apps
    }
}

/// Wire the production adapters from a resolved configuration.
pub fn bootstrap(config: &CliConfig) -> CliResult<CliContext> {
    let client = DefaultSiddhiClient::new(&config.client_config())?;
    let files = match &config.scan_dir {
        Some(dir) => DirectoryAppFiles::new(dir),
        None => DirectoryAppFiles::current_dir().map_err(CoreError::from)?,
    };
    debug!(
        apps_host = %config.apps_host,
        query_host = %config.query_host,
        scan_dir = %files.dir().display(),
        "bootstrapped CLI context"
    );

    Ok(bootstrap_with(Arc::new(client), Arc::new(files)))
}

/// Compose a context from arbitrary port implementations.
pub fn bootstrap_with(
    registry: Arc<dyn AppRegistryPort>,
    files: Arc<dyn AppFilesPort>,
) -> CliContext {
    CliContext {
        apps: AppsService::new(registry, files),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_bootstrap_with_defaults() {
        let config = CliConfig {
            scan_dir: Some(PathBuf::from(".")),
            ..CliConfig::default()
        };
        assert!(bootstrap(&config).is_ok());
    }

    #[test]
    fn test_bootstrap_rejects_bad_host() {
        let config = CliConfig {
            apps_host: "not a url".into(),
            ..CliConfig::default()
        };
        let err = bootstrap(&config).err().unwrap();
        assert_eq!(err.exit_code(), 78);
    }
}
