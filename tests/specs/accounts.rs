use crate::support::Daemon;
use std::io::Write;

#[test]
#[serial_test::serial(backr_daemon)]
fn creating_an_account_ends_bootstrap_mode_and_login_unlocks_authenticated_commands() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    let create = daemon.cli().args(["account", "create", "alice"]).output().unwrap();
    assert!(create.status.success(), "stderr: {}", String::from_utf8_lossy(&create.stderr));
    let create_stdout = String::from_utf8_lossy(&create.stdout);
    assert!(create_stdout.contains("shown once"));

    let password = create_stdout
        .lines()
        .find_map(|line| line.strip_prefix("Password (shown once): "))
        .expect("password line in create-account output")
        .trim()
        .to_string();

    // Once an account exists, unauthenticated requests are rejected.
    let unauthenticated = daemon.cli().args(["project", "list"]).output().unwrap();
    assert!(!unauthenticated.status.success());

    let mut login = daemon
        .cli()
        .args(["login", "--username", "alice"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    login
        .stdin
        .take()
        .unwrap()
        .write_all(format!("{password}\n").as_bytes())
        .unwrap();
    let login_status = login.wait().unwrap();
    assert!(login_status.success());

    let authenticated = daemon.cli().args(["project", "list"]).output().unwrap();
    assert!(authenticated.status.success(), "stderr: {}", String::from_utf8_lossy(&authenticated.stderr));
}

#[test]
#[serial_test::serial(backr_daemon)]
fn listing_accounts_shows_every_created_username() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    daemon.cli().args(["account", "create", "alice"]).output().unwrap();
    daemon.cli().args(["account", "create", "bob"]).output().unwrap();

    let list = daemon.cli().args(["account", "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("bob"));
}
