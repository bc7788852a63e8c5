//! cli_flow.rs
//!
//! Runs the built `mintcheck` binary against throwaway shell scripts standing
//! in for the solana CLI. Unix only.
//!
//! All scenarios share one test function so no other test thread forks while
//! a script file is still open for writing.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const OWNER: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";

fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\necho \"$@\" > \"$0.args\"\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn mintcheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mintcheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn mintcheck")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn check_flow_against_fake_tool() {
    let dir = tempfile::tempdir().unwrap();

    let derived = mintcheck(&["derive", "--json"]);
    assert!(derived.status.success());
    let derived: serde_json::Value = serde_json::from_slice(&derived.stdout).unwrap();
    let address = derived["address"].as_str().unwrap().to_string();

    // Success: owner printed, fixed arguments passed.
    let ok = fake_tool(
        dir.path(),
        "ok",
        &format!("printf '%s' '{{\"pubkey\":\"{address}\",\"account\":{{\"owner\":\"{OWNER}\",\"lamports\":1}}}}'"),
    );
    let out = mintcheck(&["--solana-bin", ok.to_str().unwrap()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with(&format!("Mint Address: {address}\n")), "{text}");
    assert!(text.contains(&format!("Owner: {OWNER}\n")), "{text}");
    let args = fs::read_to_string(dir.path().join("ok.args")).unwrap();
    assert_eq!(args.trim_end(), format!("account {address} --output json"));

    // Cluster url is forwarded.
    let out = mintcheck(&["check", "--solana-bin", ok.to_str().unwrap(), "--url", "http://127.0.0.1:8899"]);
    assert!(out.status.success());
    let args = fs::read_to_string(dir.path().join("ok.args")).unwrap();
    assert!(args.trim_end().ends_with("--url http://127.0.0.1:8899"), "{args}");

    // Non-zero exit: stderr echoed, mintcheck still exits cleanly.
    let failing = fake_tool(dir.path(), "failing", "echo boom >&2\nexit 3");
    let out = mintcheck(&["--solana-bin", failing.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Error getting account: boom"), "{}", stdout(&out));

    // Malformed output on success.
    let garbage = fake_tool(dir.path(), "garbage", "echo '<html>nope</html>'");
    let out = mintcheck(&["--solana-bin", garbage.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Exception:"), "{}", stdout(&out));

    // Output that is not valid UTF-8.
    let binary = fake_tool(dir.path(), "binary", r#"printf '{"owner":"ab\377cd"}'"#);
    let out = mintcheck(&["--solana-bin", binary.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Exception: account output is not valid utf-8"), "{}", stdout(&out));
    assert!(!stdout(&out).contains("Owner:"), "{}", stdout(&out));

    // Tool that does not exist.
    let missing = dir.path().join("missing");
    let out = mintcheck(&["--solana-bin", missing.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Exception: failed to run"), "{}", stdout(&out));

    // JSON mode.
    let out = mintcheck(&["--json", "--solana-bin", failing.to_str().unwrap()]);
    assert!(out.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(doc["address"], address.as_str());
    assert_eq!(doc["tool_error"]["code"], 3);

    // Configuration errors are fatal.
    let out = mintcheck(&["--program-id", "not-a-key"]);
    assert!(!out.status.success());

    let long = "x".repeat(40);
    let out = mintcheck(&["derive", "--seed", long.as_str()]);
    assert!(!out.status.success());
}
