// tests/exit_status.rs
//
// Both binaries report a fatal error as one `Error: ...` line and exit 1.
//
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pca_exit_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn parse_rebrand_unreadable_file_reports_cause_once() {
    let dir = tmp_dir("parse");
    let missing = dir.join("nope.html");

    let out = Command::new(env!("CARGO_BIN_EXE_parse-rebrand"))
        .arg(&missing)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    let line = stderr.lines().find(|l| l.starts_with("Error: ")).expect("error line");
    assert!(line.starts_with(&format!("Error: failed to read {}", missing.display())), "{line}");
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn deploy_missing_env_file_exits_one() {
    let dir = tmp_dir("deploy");
    let env_file = dir.join(".env.production");

    let out = Command::new(env!("CARGO_BIN_EXE_deploy"))
        .arg("--env-file")
        .arg(&env_file)
        .arg("--dry-run")
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr.trim_end(), format!("Error: {} not found", env_file.display()));
}
