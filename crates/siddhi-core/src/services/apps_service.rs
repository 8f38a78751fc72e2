//! App operations service - folds local and remote app operations into outputs.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::output::AppsOutput;
use crate::domain::{AppDefinition, DeployedApp, QueryResult, Report, StateQuery};
use crate::parsing::is_identifier;
use crate::ports::{AppFilesPort, AppRegistryPort, CoreError, CoreResult, RegistryError};

/// Outcome of looking up a local app file by declared name.
enum Lookup {
    NoFiles,
    NotFound,
    Found {
        definition: AppDefinition,
        source: String,
    },
}

/// Service for the user-facing app operations.
///
/// Expected absence (no local files, nothing deployed, unknown name) comes
/// back as an [`AppsOutput`] variant. Only hard failures of the ports
/// (unreadable directory, unreachable host, unparsable response) are errors.
///
/// Every call is awaited in sequence. Batch operations keep going after a
/// per-app failure and record it in the report.
pub struct AppsService {
    registry: Arc<dyn AppRegistryPort>,
    files: Arc<dyn AppFilesPort>,
}

impl AppsService {
    /// Create a new service over the given ports.
    pub fn new(registry: Arc<dyn AppRegistryPort>, files: Arc<dyn AppFilesPort>) -> Self {
        Self { registry, files }
    }

    /// Tables declared by the local app named `app_name`.
    pub async fn get_meta(&self, app_name: &str) -> CoreResult<AppsOutput> {
        Ok(match self.find_app(app_name).await? {
            Lookup::NoFiles => AppsOutput::NoLocalApps,
            Lookup::NotFound => AppsOutput::AppNotFound(app_name.to_string()),
            Lookup::Found { definition, .. } => AppsOutput::Tables(definition.tables),
        })
    }

    /// Records of `table_name` in the context of `app_name`.
    ///
    /// Without a table name, every table the local definition of `app_name`
    /// declares is queried in declaration order.
    pub async fn get_state(
        &self,
        app_name: &str,
        table_name: Option<&str>,
    ) -> CoreResult<AppsOutput> {
        if let Some(table_name) = table_name {
            let result = self.query_table(app_name, table_name).await?;
            return Ok(AppsOutput::State(result));
        }

        let definition = match self.find_app(app_name).await? {
            Lookup::NoFiles => return Ok(AppsOutput::NoLocalApps),
            Lookup::NotFound => return Ok(AppsOutput::AppNotFound(app_name.to_string())),
            Lookup::Found { definition, .. } => definition,
        };
        if definition.tables.is_empty() {
            return Ok(AppsOutput::Tables(Vec::new()));
        }

        let mut states: Vec<(String, QueryResult)> = Vec::with_capacity(definition.tables.len());
        for table in definition.tables {
            if states.iter().any(|(seen, _)| *seen == table) {
                continue;
            }
            let result = self.query_table(app_name, &table).await?;
            states.push((table, result));
        }
        Ok(AppsOutput::TableStates(states))
    }

    /// Deploy the first local app file that declares `app_name`.
    pub async fn install(&self, app_name: &str) -> CoreResult<AppsOutput> {
        match self.find_app(app_name).await? {
            Lookup::NoFiles => Ok(AppsOutput::NoLocalApps),
            Lookup::NotFound => Ok(AppsOutput::AppNotFound(app_name.to_string())),
            Lookup::Found { definition, source } => {
                info!(app = %app_name, path = %definition.path.display(), "deploying app");
                let result = self.registry.deploy(&source).await?;
                Ok(AppsOutput::Single(result))
            }
        }
    }

    /// Deploy every local app file, named or not.
    pub async fn install_all(&self) -> CoreResult<AppsOutput> {
        let paths = self.files.list_app_files().await?;
        if paths.is_empty() {
            return Ok(AppsOutput::NoLocalApps);
        }

        let mut report = Report::new();
        for path in paths {
            let source = self.files.read_app_file(&path).await?;
            let definition = AppDefinition::from_source(path, &source);
            info!(app = %definition.name, path = %definition.path.display(), "deploying app");
            let result = self.registry.deploy(&source).await?;
            if result.is_error() {
                info!(app = %definition.name, outcome = %result, "deploy failed");
            }
            report.push(definition.name, result);
        }
        Ok(AppsOutput::Report(report))
    }

    /// Delete the deployed app named `app_name`.
    pub async fn uninstall(&self, app_name: &str) -> CoreResult<AppsOutput> {
        info!(app = %app_name, "deleting app");
        let result = self.registry.delete(app_name).await?;
        Ok(AppsOutput::Single(result))
    }

    /// Delete every app the registry lists as active.
    pub async fn uninstall_all(&self) -> CoreResult<AppsOutput> {
        let Some(apps) = self.active_apps().await? else {
            return Ok(AppsOutput::RegistryUnavailable);
        };
        if apps.is_empty() {
            return Ok(AppsOutput::NoDeployedApps);
        }

        let mut report = Report::new();
        for app in apps {
            info!(app = %app, "deleting app");
            let result = self.registry.delete(&app.name).await?;
            if result.is_error() {
                info!(app = %app, outcome = %result, "delete failed");
            }
            report.push(app.name, result);
        }
        Ok(AppsOutput::Report(report))
    }

    /// Apps currently active on the registry.
    pub async fn get_deployed(&self) -> CoreResult<AppsOutput> {
        Ok(match self.active_apps().await? {
            Some(apps) => AppsOutput::Deployed(apps),
            None => AppsOutput::RegistryUnavailable,
        })
    }

    /// Declared names of the local app files, skipping unnamed ones.
    pub async fn list(&self) -> CoreResult<AppsOutput> {
        let paths = self.files.list_app_files().await?;
        if paths.is_empty() {
            return Ok(AppsOutput::LocalApps(None));
        }

        let mut names = Vec::with_capacity(paths.len());
        for path in paths {
            let source = self.files.read_app_file(&path).await?;
            let definition = AppDefinition::from_source(path, &source);
            if definition.has_name() {
                names.push(definition.name);
            }
        }
        Ok(AppsOutput::LocalApps(Some(names)))
    }

    /// First local app file, in scan order, that declares `app_name`.
    async fn find_app(&self, app_name: &str) -> CoreResult<Lookup> {
        let paths = self.files.list_app_files().await?;
        if paths.is_empty() {
            return Ok(Lookup::NoFiles);
        }

        for path in paths {
            let source = self.files.read_app_file(&path).await?;
            let definition = AppDefinition::from_source(path, &source);
            if definition.is_named(app_name) {
                debug!(app = %app_name, path = %definition.path.display(), "found app file");
                return Ok(Lookup::Found { definition, source });
            }
        }
        Ok(Lookup::NotFound)
    }

    /// Active apps, or `None` when the registry refuses to list them.
    async fn active_apps(&self) -> CoreResult<Option<Vec<DeployedApp>>> {
        match self.registry.list_active_apps().await {
            Ok(apps) => Ok(Some(apps)),
            Err(RegistryError::Rejected { status, message }) => {
                warn!(status, %message, "registry refused to list active apps");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn query_table(&self, app_name: &str, table_name: &str) -> CoreResult<QueryResult> {
        if !is_identifier(table_name) {
            return Err(CoreError::Validation(format!(
                "Invalid table name: '{table_name}'"
            )));
        }
        let query = StateQuery::new(app_name, table_name);
        debug!(app = %app_name, query = %query.query_text(), "executing store query");
        Ok(self.registry.execute_state_query(&query).await?)
    }
}
