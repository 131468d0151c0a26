use crate::support::Daemon;

#[test]
#[serial_test::serial(backr_daemon)]
fn create_then_list_then_get_round_trips_a_project() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    let create = daemon
        .cli()
        .args(["project", "create", "nightly-db", "--rule", "3:7"])
        .output()
        .unwrap();
    assert!(create.status.success(), "stderr: {}", String::from_utf8_lossy(&create.stderr));
    assert!(String::from_utf8_lossy(&create.stdout).contains("nightly-db"));

    let list = daemon.cli().args(["project", "list"]).output().unwrap();
    let list_stdout = String::from_utf8_lossy(&list.stdout);
    assert!(list_stdout.contains("nightly-db"));
    assert!(list_stdout.contains("3:7"));

    let get = daemon.cli().args(["project", "get", "nightly-db"]).output().unwrap();
    assert!(get.status.success());
    let get_stdout = String::from_utf8_lossy(&get.stdout);
    assert!(get_stdout.contains("nightly-db"));
}

#[test]
#[serial_test::serial(backr_daemon)]
fn creating_a_project_with_no_rule_gets_the_default_rule() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    let create = daemon.cli().args(["project", "create", "logs"]).output().unwrap();
    assert!(create.status.success());
    let stdout = String::from_utf8_lossy(&create.stdout);
    assert!(stdout.contains("3:1"), "expected the default count:min_age rule, got: {stdout}");
}

#[test]
#[serial_test::serial(backr_daemon)]
fn creating_the_same_project_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    daemon.cli().args(["project", "create", "nightly-db"]).output().unwrap();
    let second = daemon.cli().args(["project", "create", "nightly-db"]).output().unwrap();

    assert!(!second.status.success());
}

#[test]
#[serial_test::serial(backr_daemon)]
fn getting_an_unknown_project_fails() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    let get = daemon.cli().args(["project", "get", "does-not-exist"]).output().unwrap();
    assert!(!get.status.success());
}
