use crate::support::Daemon;

#[test]
#[serial_test::serial(backr_daemon)]
fn a_fresh_daemon_starts_in_bootstrap_mode_with_no_projects() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    let output = daemon.cli().args(["project", "list"]).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No projects configured"), "stdout: {stdout}");
}

#[test]
#[serial_test::serial(backr_daemon)]
fn getting_the_presigned_url_for_an_unknown_path_fails_against_an_unreachable_s3_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let daemon = Daemon::spawn(dir.path());

    let output = daemon.cli().args(["file", "url", "nightly-db/backup.tar"]).output().unwrap();

    assert!(!output.status.success());
}
