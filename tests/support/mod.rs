// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::net::TcpStream;
use std::path::Path;
use std::process::{Child, Command};
use std::time::{Duration, Instant};

/// A running `brd` daemon for the duration of one test, backed by a
/// scratch directory that owns its sled database, config file, and
/// (isolated) `~/.backr_auth`.
pub struct Daemon {
    child: Child,
    pub addr: String,
    pub home: std::path::PathBuf,
}

impl Daemon {
    /// Spawns `brd` against a fresh sled db in `dir`, with an
    /// unreachable S3 endpoint and webhook URL so file-store and
    /// notifier calls fail fast and deterministically instead of
    /// hanging or reaching the network.
    pub fn spawn(dir: &Path) -> Self {
        let port = free_port();
        let sled_path = dir.join("backr.sled");
        let config_path = dir.join("backr.toml");
        let home = dir.join("home");
        std::fs::create_dir_all(&home).expect("create isolated home dir");

        std::fs::write(
            &config_path,
            format!(
                r#"
[s3]
bucket = "test-bucket"
endpoint = "127.0.0.1:1"
access_key = "test-access-key"
secret_key = "test-secret-key"
use_tls = false

[sled]
filepath = {sled_path:?}

[api]
listen_ip = "127.0.0.1"
listen_port = {port}
jwt_secret = "test-jwt-secret"

[slack]
webhook_url = "http://127.0.0.1:1/webhook"

[notifier]
cooldown_secs = 60
"#
            ),
        )
        .expect("write daemon config");

        let child = Command::new(assert_cmd::cargo::cargo_bin("brd"))
            .env("BACKR_CONFIG", &config_path)
            .env("RUST_LOG", "warn")
            .spawn()
            .expect("spawn brd");

        let addr = format!("http://127.0.0.1:{port}");
        wait_for_port(port);

        Self { child, addr, home }
    }

    /// A `br` invocation pre-wired to this daemon's address and an
    /// isolated `$HOME` so `~/.backr_auth` doesn't leak across tests.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin("br"));
        cmd.env("HOME", &self.home).arg("--server").arg(&self.addr);
        cmd
    }
}

impl Drop for Daemon {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind ephemeral port")
        .local_addr()
        .expect("read local addr")
        .port()
}

fn wait_for_port(port: u16) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if TcpStream::connect(("127.0.0.1", port)).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    panic!("brd did not start listening on port {port} in time");
}
