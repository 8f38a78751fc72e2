//! End-to-end command tests.
//!
//! Real directory scanner over a temp folder, real `SiddhiClient` over the
//! fake HTTP backend, output captured from the handlers.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use siddhi_api::testing::{CannedResponse, FakeBackend};
use siddhi_api::{HttpMethod, RequestBody, SiddhiClient, SiddhiClientConfig};
use siddhi_cli::{CliContext, CliError, Commands, bootstrap_with, handlers};
use siddhi_core::DirectoryAppFiles;
use tempfile::{TempDir, tempdir};

const ORDERS: &str = "@App:name('Orders')\n\
                      define stream OrderStream (id string, qty int);\n\
                      define table OrderTable (id string, qty int);\n\
                      define table AuditTable (id string);\n";
const STOCK: &str = "@App:name(\"Stock\")\ndefine stream StockStream (sym string);\n";
const UNNAMED: &str = "-- scratch file\ndefine stream S (a int);\n";

fn app_folder(files: &[(&str, &str)]) -> TempDir {
    let temp = tempdir().unwrap();
    for (name, source) in files {
        fs::write(temp.path().join(name), source).unwrap();
    }
    temp
}

fn context(dir: &Path, backend: &FakeBackend) -> CliContext {
    let config = SiddhiClientConfig::new()
        .with_apps_host("https://worker:9443")
        .with_query_host("https://worker:7443");
    let client = SiddhiClient::with_backend(&config, backend.clone()).unwrap();
    bootstrap_with(Arc::new(client), Arc::new(DirectoryAppFiles::new(dir)))
}

async fn run(ctx: &CliContext, command: Commands) -> Result<String, CliError> {
    let mut out = Vec::new();
    handlers::dispatch(ctx, &command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn list_shows_named_apps_only() {
    let folder = app_folder(&[("orders.siddhi", ORDERS), ("scratch.siddhi", UNNAMED)]);
    let ctx = context(folder.path(), &FakeBackend::new());

    let output = run(&ctx, Commands::List).await.unwrap();
    assert_eq!(output, "Local Siddhi applications:\n - Orders\n");
}

#[tokio::test]
async fn list_in_empty_folder() {
    let folder = app_folder(&[("readme.txt", "not an app")]);
    let ctx = context(folder.path(), &FakeBackend::new());

    let output = run(&ctx, Commands::List).await.unwrap();
    assert_eq!(output, "Local Siddhi applications:\n None\n");
}

#[tokio::test]
async fn list_with_only_unnamed_files_prints_header() {
    let folder = app_folder(&[("scratch.siddhi", UNNAMED)]);
    let ctx = context(folder.path(), &FakeBackend::new());

    let output = run(&ctx, Commands::List).await.unwrap();
    assert_eq!(output, "Local Siddhi applications:\n");
}

#[tokio::test]
async fn list_reads_files_with_bom_and_invalid_utf8() {
    let folder = app_folder(&[("orders.siddhi", ORDERS)]);
    fs::write(
        folder.path().join("windows.siddhi"),
        "\u{feff}@App:name('Windows')\ndefine stream S (a int);\n",
    )
    .unwrap();
    fs::write(
        folder.path().join("latin1.siddhi"),
        b"@App:name('Latin')\n-- caf\xe9\n",
    )
    .unwrap();
    let ctx = context(folder.path(), &FakeBackend::new());

    let output = run(&ctx, Commands::List).await.unwrap();
    let mut names: Vec<&str> = output.lines().skip(1).collect();
    names.sort_unstable();
    assert_eq!(names, vec![" - Latin", " - Orders", " - Windows"]);
}

#[tokio::test]
async fn meta_lists_declared_tables() {
    let folder = app_folder(&[("orders.siddhi", ORDERS), ("stock.siddhi", STOCK)]);
    let ctx = context(folder.path(), &FakeBackend::new());

    let output = run(
        &ctx,
        Commands::Meta {
            app: Some("Orders".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(output, "Tables:\n - OrderTable\n - AuditTable\n");

    let output = run(
        &ctx,
        Commands::Meta {
            app: Some("Stock".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(output, "None\n");
}

#[tokio::test]
async fn meta_reports_absence() {
    let folder = app_folder(&[("orders.siddhi", ORDERS)]);
    let ctx = context(folder.path(), &FakeBackend::new());
    let output = run(&ctx, Commands::Meta { app: Some("X".into()) })
        .await
        .unwrap();
    assert_eq!(output, "ERROR: Cannot find Siddhi app : X\n");

    let empty = app_folder(&[]);
    let ctx = context(empty.path(), &FakeBackend::new());
    let output = run(&ctx, Commands::Meta { app: Some("X".into()) })
        .await
        .unwrap();
    assert_eq!(output, "ERROR: There are no Siddhi apps in current folder\n");
}

#[tokio::test]
async fn meta_without_app_is_a_missing_argument() {
    let folder = app_folder(&[("orders.siddhi", ORDERS)]);
    let ctx = context(folder.path(), &FakeBackend::new());

    let err = run(&ctx, Commands::Meta { app: None }).await.unwrap_err();
    assert_eq!(err.to_string(), "ERROR: Argument app need to have a value.");
    assert_eq!(err.exit_code(), 1);

    let err = run(
        &ctx,
        Commands::State {
            app: None,
            table: Some("OrderTable".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::MissingArgument(_)));
}

#[tokio::test]
async fn install_one_app_uploads_its_source() {
    let folder = app_folder(&[("orders.siddhi", ORDERS), ("stock.siddhi", STOCK)]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Put,
        "/siddhi-apps",
        CannedResponse::status(201, ""),
    );
    let ctx = context(folder.path(), &backend);

    let output = run(
        &ctx,
        Commands::Install {
            app: Some("Stock".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(output, "Deploying application: Stock\nDeployed.\n");

    let puts = backend.requests_with(HttpMethod::Put);
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body, RequestBody::Text(STOCK.to_string()));
}

#[tokio::test]
async fn install_all_reports_every_file() {
    let folder = app_folder(&[("orders.siddhi", ORDERS), ("stock.siddhi", STOCK)]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Put,
        "/siddhi-apps",
        CannedResponse::status(
            400,
            r#"{"type":"ERROR","message":"Siddhi App already exists"}"#,
        ),
    );
    let ctx = context(folder.path(), &backend);

    let output = run(&ctx, Commands::Install { app: None }).await.unwrap();
    let mut lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.remove(0), "Deploying all applications...");
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec![
            "Orders: ERROR: Siddhi App already exists",
            "Stock: ERROR: Siddhi App already exists",
        ]
    );
    assert_eq!(backend.requests_with(HttpMethod::Put).len(), 2);
}

#[tokio::test]
async fn uninstall_all_deletes_each_active_app() {
    let folder = app_folder(&[]);
    let backend = FakeBackend::new()
        .with_response(
            HttpMethod::Get,
            "/siddhi-apps",
            CannedResponse::json(r#"["Orders","Stock"]"#),
        )
        .with_response(
            HttpMethod::Delete,
            "/siddhi-apps/Stock",
            CannedResponse::status(500, r#"{"message":"app is busy"}"#),
        )
        .with_response(
            HttpMethod::Delete,
            "/siddhi-apps/",
            CannedResponse::status(200, ""),
        );
    let ctx = context(folder.path(), &backend);

    let output = run(&ctx, Commands::Uninstall { app: None }).await.unwrap();
    assert_eq!(
        output,
        "Deleting all applications...\nOrders: Deleted.\nStock: ERROR: app is busy\n"
    );

    let deletes: Vec<String> = backend
        .requests_with(HttpMethod::Delete)
        .iter()
        .map(|request| request.url.path().to_string())
        .collect();
    assert_eq!(deletes, vec!["/siddhi-apps/Orders", "/siddhi-apps/Stock"]);
}

#[tokio::test]
async fn uninstall_all_with_nothing_deployed() {
    let folder = app_folder(&[]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Get,
        "/siddhi-apps",
        CannedResponse::json("[]"),
    );
    let ctx = context(folder.path(), &backend);

    let output = run(&ctx, Commands::Uninstall { app: None }).await.unwrap();
    assert_eq!(
        output,
        "Deleting all applications...\nThere are no Siddhi apps deployed\n"
    );
    assert!(backend.requests_with(HttpMethod::Delete).is_empty());
}

#[tokio::test]
async fn uninstall_one_app() {
    let folder = app_folder(&[]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Delete,
        "/siddhi-apps/",
        CannedResponse::status(404, r#"{"message":"Siddhi App not found"}"#),
    );
    let ctx = context(folder.path(), &backend);

    let output = run(
        &ctx,
        Commands::Uninstall {
            app: Some("Gone".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        output,
        "Deleting application: Gone\nERROR: Siddhi App not found\n"
    );
}

#[tokio::test]
async fn deployed_lists_active_apps() {
    let folder = app_folder(&[]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Get,
        "/siddhi-apps",
        CannedResponse::json(r#"["Orders"]"#),
    );
    let ctx = context(folder.path(), &backend);
    let output = run(&ctx, Commands::Deployed).await.unwrap();
    assert_eq!(output, "Deployed applications:\n - Orders\n");

    let refusing = FakeBackend::new().with_response(
        HttpMethod::Get,
        "/siddhi-apps",
        CannedResponse::status(401, ""),
    );
    let ctx = context(folder.path(), &refusing);
    let output = run(&ctx, Commands::Deployed).await.unwrap();
    assert_eq!(output, "ERROR: There was an error.\n");
}

#[tokio::test]
async fn state_of_one_table() {
    let folder = app_folder(&[]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Post,
        "/stores/query",
        CannedResponse::json(r#"{"records":[["A1",3],["B2",null]]}"#),
    );
    let ctx = context(folder.path(), &backend);

    let output = run(
        &ctx,
        Commands::State {
            app: Some("Orders".into()),
            table: Some("OrderTable".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(output, "A1,3\nB2,\n");

    let posts = backend.requests_with(HttpMethod::Post);
    assert_eq!(posts[0].url.as_str(), "https://worker:7443/stores/query");
    assert_eq!(
        posts[0].body,
        RequestBody::Json(json!({"appName": "Orders", "query": "from OrderTable select *"}))
    );
}

#[tokio::test]
async fn state_of_every_declared_table() {
    let folder = app_folder(&[("orders.siddhi", ORDERS)]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Post,
        "/stores/query",
        CannedResponse::json(r#"{"records":[["row"]]}"#),
    );
    let ctx = context(folder.path(), &backend);

    let output = run(
        &ctx,
        Commands::State {
            app: Some("Orders".into()),
            table: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(output, "OrderTable:\nrow\nAuditTable:\nrow\n");

    let queries: Vec<RequestBody> = backend
        .requests_with(HttpMethod::Post)
        .into_iter()
        .map(|request| request.body)
        .collect();
    assert_eq!(
        queries,
        vec![
            RequestBody::Json(json!({"appName": "Orders", "query": "from OrderTable select *"})),
            RequestBody::Json(json!({"appName": "Orders", "query": "from AuditTable select *"})),
        ]
    );
}

#[tokio::test]
async fn malformed_query_response_is_a_hard_error() {
    let folder = app_folder(&[]);
    let backend = FakeBackend::new().with_response(
        HttpMethod::Post,
        "/stores/query",
        CannedResponse::json("<html>oops</html>"),
    );
    let ctx = context(folder.path(), &backend);

    let err = run(
        &ctx,
        Commands::State {
            app: Some("Orders".into()),
            table: Some("OrderTable".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::Core(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn invalid_table_name_is_rejected_before_any_request() {
    let folder = app_folder(&[]);
    let backend = FakeBackend::new();
    let ctx = context(folder.path(), &backend);

    let err = run(
        &ctx,
        Commands::State {
            app: Some("Orders".into()),
            table: Some("T select *".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CliError::Arguments(_)));
    assert!(backend.requests().is_empty());
}
