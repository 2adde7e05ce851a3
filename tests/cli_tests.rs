use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{MockBackend, inspection_json, obras, site_json};

fn backend() -> MockBackend {
    MockBackend::start(|req| match (req.method.as_str(), req.path.as_str()) {
        ("GET", "/obras") => (200, json!([site_json("o1", "Escola Municipal")])),
        ("GET", "/obras/o1") => (200, site_json("o1", "Escola Municipal")),
        ("GET", "/fiscalizacoes/f1") => (200, inspection_json("f1", "o1", "Parada")),
        ("GET", "/obras/o1/fiscalizacoes") => (
            200,
            json!([inspection_json("f1", "o1", "Atrasada")]),
        ),
        ("POST", "/obras") | ("POST", "/fiscalizacoes") => (201, json!({})),
        ("PUT", "/obras/o1") => (200, json!({})),
        ("DELETE", "/obras/o1") => (200, json!({ "message": "ok" })),
        ("POST", "/obras/o1/email") => (200, json!({ "message": "sent" })),
        _ => (404, json!({ "error": "Obra não encontrada" })),
    })
}

#[test]
fn init_writes_config_with_resolved_address() {
    let home = TempDir::new().unwrap();

    obras(home.path())
        .args(["--api-url", "http://10.0.0.5:5000", "init"])
        .assert()
        .success()
        .stdout(contains("http://10.0.0.5:5000"));

    let conf = fs::read_to_string(home.path().join(".obras/obras.conf")).unwrap();
    assert!(conf.contains("api_url: http://10.0.0.5:5000"));
}

#[test]
fn test_mode_init_leaves_no_file() {
    let home = TempDir::new().unwrap();

    obras(home.path())
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));

    assert!(!home.path().join(".obras/obras.conf").exists());
}

#[test]
fn env_address_overrides_file_and_flag_overrides_env() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".obras")).unwrap();
    fs::write(
        home.path().join(".obras/obras.conf"),
        "api_url: http://from-file:5000\n",
    )
    .unwrap();

    obras(home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://from-file:5000"));

    obras(home.path())
        .env("OBRAS_API_URL", "http://from-env:5000")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://from-env:5000"));

    obras(home.path())
        .env("OBRAS_API_URL", "http://from-env:5000")
        .args(["--api-url", "http://from-flag:5000", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://from-flag:5000"));
}

#[test]
fn check_reports_missing_keys_until_migrated() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".obras")).unwrap();
    fs::write(
        home.path().join(".obras/obras.conf"),
        "api_url: http://localhost:5000\n",
    )
    .unwrap();

    obras(home.path())
        .args(["config", "--check"])
        .assert()
        .failure()
        .stdout(contains("camera_enabled"));

    obras(home.path())
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added missing keys"));

    obras(home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid."));
}

#[test]
fn broken_config_file_still_reaches_config_commands() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".obras")).unwrap();
    fs::write(home.path().join(".obras/obras.conf"), "api_url: [oops\n").unwrap();

    obras(home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("using default settings").and(contains("http://localhost:5000")));

    obras(home.path())
        .args(["site", "list"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn site_list_prints_a_table() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args(["--api-url", &api.url, "site", "list"])
        .assert()
        .success()
        .stdout(
            contains("Escola Municipal")
                .and(contains("13-02-2022 → 20-12-2022"))
                .and(contains("Responsible")),
        );
}

#[test]
fn site_show_includes_inspections() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args(["--api-url", &api.url, "site", "show", "o1"])
        .assert()
        .success()
        .stdout(
            contains("Escola Municipal")
                .and(contains("Atrasada - 01-03-2022"))
                .and(contains("Lat: -23.55050 | Long: -46.63330")),
        );
}

#[test]
fn unknown_site_shows_server_text() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args(["--api-url", &api.url, "site", "show", "nope"])
        .assert()
        .failure()
        .stderr(contains("Obra não encontrada"));
}

#[test]
fn site_add_sends_exchange_dates_and_location() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url",
            &api.url,
            "site",
            "add",
            "--name",
            "Ponte",
            "--responsible",
            "João",
            "--start",
            "01/02/2023",
            "--end",
            "30-06-2023",
            "--description",
            "Ponte sobre o rio",
            "--at",
            "-22.9,-43.2",
        ])
        .assert()
        .success()
        .stdout(contains("Work site created!"));

    let post = &api.requests_with("POST")[0];
    let body = post.json();
    assert_eq!(post.path, "/obras");
    assert_eq!(body["dataInicio"], "2023-02-01");
    assert_eq!(body["dataFim"], "2023-06-30");
    assert_eq!(body["localizacao"], json!({ "lat": -22.9, "long": -43.2 }));
}

#[test]
fn site_add_with_missing_fields_makes_no_request() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args(["--api-url", &api.url, "site", "add", "--name", "Ponte"])
        .assert()
        .failure()
        .stderr(contains("Fill in all required fields"));

    assert!(api.requests().is_empty());
}

#[test]
fn site_add_attaches_photo_file() {
    let home = TempDir::new().unwrap();
    let photo = home.path().join("foto.jpg");
    fs::write(&photo, [0xff, 0xd8, 0xff]).unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url",
            &api.url,
            "site",
            "add",
            "--name",
            "Ponte",
            "--responsible",
            "João",
            "--start",
            "01-02-2023",
            "--end",
            "30-06-2023",
            "--description",
            "Ponte",
            "--photo",
        ])
        .arg(&photo)
        .assert()
        .success();

    let body = api.requests_with("POST")[0].json();
    assert_eq!(body["foto"], "data:image/jpeg;base64,/9j/");
}

#[test]
fn disabled_camera_is_a_permission_error() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".obras")).unwrap();
    fs::write(
        home.path().join(".obras/obras.conf"),
        "camera_enabled: false\n",
    )
    .unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url", &api.url, "site", "add", "--name", "Ponte", "--photo", "x.jpg",
        ])
        .assert()
        .failure()
        .stderr(contains("Permission denied to access the camera!"));

    assert!(api.requests().is_empty());
}

#[test]
fn site_edit_only_changes_given_fields() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url",
            &api.url,
            "site",
            "edit",
            "o1",
            "--name",
            "Escola Estadual",
        ])
        .assert()
        .success()
        .stdout(contains("Work site updated!"));

    let put = &api.requests_with("PUT")[0];
    let body = put.json();
    assert_eq!(put.path, "/obras/o1");
    assert_eq!(body["nome"], "Escola Estadual");
    assert_eq!(body["responsavel"], "Maria Souza");
    assert_eq!(body["dataInicio"], "2022-02-13");
}

#[test]
fn site_del_declined_on_stdin() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args(["--api-url", &api.url, "site", "del", "o1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert!(api.requests_with("DELETE").is_empty());
}

#[test]
fn site_del_with_yes_deletes() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args(["--api-url", &api.url, "site", "del", "o1", "-y"])
        .assert()
        .success()
        .stdout(contains("Work site deleted!"));

    assert_eq!(api.requests_with("DELETE")[0].path, "/obras/o1");
}

#[test]
fn site_email_posts_the_address() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url",
            &api.url,
            "site",
            "email",
            "o1",
            "fiscal@example.com",
        ])
        .assert()
        .success()
        .stdout(contains("E-mail sent!"));

    assert_eq!(
        api.requests_with("POST")[0].json(),
        json!({ "email": "fiscal@example.com" })
    );
}

#[test]
fn site_inspect_links_the_inspection() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url",
            &api.url,
            "site",
            "inspect",
            "o1",
            "--date",
            "05-03-2022",
            "--status",
            "em-dia",
            "--observations",
            "Tudo certo",
        ])
        .assert()
        .success()
        .stdout(contains("Inspection created!"));

    let body = api.requests_with("POST")[0].json();
    assert_eq!(body["obra"], "o1");
    assert_eq!(body["status"], "Em dia");
    assert_eq!(body["data"], "2022-03-05");
}

#[test]
fn inspection_add_rejects_unknown_site() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url",
            &api.url,
            "inspection",
            "add",
            "--site",
            "o404",
            "--date",
            "05-03-2022",
            "--status",
            "parada",
            "--observations",
            "Sem equipe",
        ])
        .assert()
        .failure()
        .stdout(contains("not among the 1 available options"))
        .stderr(contains("work site"));

    assert!(api.requests_with("POST").is_empty());
}

#[test]
fn inspection_show_names_its_site() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args(["--api-url", &api.url, "inspection", "show", "f1"])
        .assert()
        .success()
        .stdout(
            contains("Inspection f1")
                .and(contains("Escola Municipal"))
                .and(contains("Parada - 01-03-2022")),
        );
}

#[test]
fn invalid_status_is_reported() {
    let home = TempDir::new().unwrap();
    let api = backend();

    obras(home.path())
        .args([
            "--api-url",
            &api.url,
            "inspection",
            "add",
            "--site",
            "o1",
            "--status",
            "finished",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid inspection status").and(contains("Em dia, Atrasada, Parada")));
}

#[test]
fn unreachable_backend_fails_cleanly() {
    let home = TempDir::new().unwrap();

    obras(home.path())
        .args(["--api-url", "http://127.0.0.1:9", "site", "list"])
        .assert()
        .failure()
        .stderr(contains("Could not connect to the backend"));
}
