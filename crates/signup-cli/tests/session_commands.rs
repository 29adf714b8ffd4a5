//! Login, logout and status against a mock server.


use assert_cmd::cargo::cargo_bin_cmd;
use fixtures::{can_bind_localhost, cookies_path, store_session_cookie, stored_token, temp_signup_home};
use predicates::prelude::*;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_stores_cookie_with_returned_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_signup_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("username=mrodriguez"))
        .and(body_string_contains("password=art123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "mrodriguez",
            "session_token": "tok-abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("signup")
        .env("SIGNUP_HOME", home.path())
        .env("SIGNUP_BASE_URL", server.uri())
        .env_remove("SIGNUP_PASSWORD")
        .args(["login", "--username", "mrodriguez", "--password", "art123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"));

    assert_eq!(stored_token(home.path()).as_deref(), Some("tok-abc"));
}

#[tokio::test]
async fn test_login_reads_password_from_stdin() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_signup_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("password=from-stdin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "mrodriguez",
            "session_token": "tok-stdin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("signup")
        .env("SIGNUP_HOME", home.path())
        .env("SIGNUP_BASE_URL", server.uri())
        .env_remove("SIGNUP_PASSWORD")
        .args(["login", "--username", "mrodriguez"])
        .write_stdin("from-stdin\n")
        .assert()
        .success();

    assert_eq!(stored_token(home.path()).as_deref(), Some("tok-stdin"));
}

#[tokio::test]
async fn test_login_failure_shows_server_detail_and_stores_nothing() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_signup_home();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Invalid username or password"})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("signup")
        .env("SIGNUP_HOME", home.path())
        .env("SIGNUP_BASE_URL", server.uri())
        .args(["login", "-u", "mrodriguez", "--password", "wrong"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid username or password"));

    assert!(!cookies_path(home.path()).exists());
}

#[tokio::test]
async fn test_logout_clears_cookie_even_when_server_fails() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_signup_home();
    store_session_cookie(home.path(), "tok-1");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("cookie", "session_token=tok-1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("signup")
        .env("SIGNUP_HOME", home.path())
        .env("SIGNUP_BASE_URL", server.uri())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out successfully"));

    assert!(stored_token(home.path()).is_none());
}

#[tokio::test]
async fn test_status_reports_logged_in_user() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_signup_home();
    store_session_cookie(home.path(), "tok-1");
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .and(header("cookie", "session_token=tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authenticated": true,
            "username": "mrodriguez"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("signup")
        .env("SIGNUP_HOME", home.path())
        .env("SIGNUP_BASE_URL", server.uri())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as mrodriguez"));
}

#[tokio::test]
async fn test_status_clears_rejected_cookie() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_signup_home();
    store_session_cookie(home.path(), "stale");
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"authenticated": false})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("signup")
        .env("SIGNUP_HOME", home.path())
        .env("SIGNUP_BASE_URL", server.uri())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));

    assert!(stored_token(home.path()).is_none());
}

#[test]
fn test_status_unreachable_server_reports_not_logged_in() {
    let home = temp_signup_home();
    store_session_cookie(home.path(), "tok-1");

    cargo_bin_cmd!("signup")
        .env("SIGNUP_HOME", home.path())
        .env("SIGNUP_BASE_URL", "http://127.0.0.1:9")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}
