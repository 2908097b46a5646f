use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn erp_admin(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("erp-admin").expect("binary");
    cmd.arg("--config-dir")
        .arg(config_dir)
        .env_remove("ERP_ADMIN_URL")
        .env_remove("ERP_ADMIN_TOKEN")
        .env_remove("ERP_ADMIN_COMPANY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_resources() {
    Command::cargo_bin("erp-admin")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("warehouses"))
        .stdout(predicate::str::contains("payment-terms"));
}

#[test]
fn config_set_then_show() {
    let dir = tempdir().unwrap();

    erp_admin(dir.path())
        .args(["config", "set", "--url", "http://erp.example.test/", "--company", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set url"));

    assert!(dir.path().join("config.toml").exists());

    erp_admin(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://erp.example.test"))
        .stdout(predicate::str::contains("company:"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_set_rejects_bad_timeout() {
    let dir = tempdir().unwrap();
    erp_admin(dir.path())
        .args(["config", "set", "--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout"));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn list_without_url_explains_how_to_configure() {
    let dir = tempdir().unwrap();
    erp_admin(dir.path())
        .args(["zones", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config set --url"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_renders_table_from_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/warehouses"))
        .and(query_param("search", "main"))
        .and(query_param("status", "active"))
        .and(header("authorization", "Bearer secret"))
        .and(header("x-company-id", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "data": [{"id": 1, "name": "Main depot", "code": "WH1", "status": "active"}],
                "total": 1,
                "totalPages": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let uri = server.uri();
    let config_dir = dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        erp_admin(&config_dir)
            .args(["--url", uri.as_str(), "--token", "secret", "--company", "9"])
            .args(["warehouses", "list", "--search", "main", "--filter", "status=active"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Main depot"))
        .stdout(predicate::str::contains("WH1"))
        .stdout(predicate::str::contains(
            "Showing 1 of 1 warehouses (page 1 of 1)",
        ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_all_walks_every_page_then_stops() {
    let server = MockServer::start().await;
    for (page, id, name) in [("1", 1, "North ridge"), ("2", 2, "South coast")] {
        Mock::given(method("GET"))
            .and(path("/zones"))
            .and(query_param("page", page))
            .and(query_param("itemsPerPage", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "data": [{"id": id, "name": name}],
                    "total": 2,
                    "totalPages": 2
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let uri = server.uri();
    let config_dir = dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        erp_admin(&config_dir)
            .args(["--url", uri.as_str()])
            .args(["zones", "list", "--all", "--items-per-page", "1"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("North ridge"))
        .stdout(predicate::str::contains("South coast"))
        .stdout(predicate::str::contains("Showing 2 of 2 zones (page 2 of 2)"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_list_exits_non_zero_with_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/taxes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let uri = server.uri();
    let config_dir = dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        erp_admin(&config_dir)
            .args(["--url", uri.as_str(), "taxes", "list"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .failure()
        .stderr(predicate::str::contains("Failed to load taxes"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_reports_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/zones/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let uri = server.uri();
    let config_dir = dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        erp_admin(&config_dir)
            .args(["--url", uri.as_str(), "zones", "delete", "5"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("Deleted zone 5"));
}
