//! tests/startup.rs
//! Runs the compiled binary and checks the process-level contract.

use std::net::TcpListener;
use std::process::{Command, Output};

fn run_daemon(port: u16) -> Output {
    Command::new(env!("CARGO_BIN_EXE_netdaemon"))
        .env_remove("SERVE")
        .env_remove("LISTEN_FDS")
        .env("ENVIRONMENT", "production")
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run netdaemon binary")
}

#[test]
fn prints_startup_line_and_exits_without_listening() {
    // Hold the port so any bind attempt by the child would fail the run.
    let occupied: TcpListener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port: u16 = occupied.local_addr().unwrap().port();

    let output: Output = run_daemon(port);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "NetDaemon starting...\n");
}

#[test]
fn repeated_runs_are_identical() {
    let occupied: TcpListener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port: u16 = occupied.local_addr().unwrap().port();

    let first: Output = run_daemon(port);
    let second: Output = run_daemon(port);

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_serve_flag_fails_startup() {
    let output: Output = Command::new(env!("CARGO_BIN_EXE_netdaemon"))
        .env("ENVIRONMENT", "production")
        .env("SERVE", "sometimes")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run netdaemon binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
