//! Build script for myple-log.
//!
//! Captures build provenance (git revision, compiler version) attached to
//! every log record. Nothing is emitted when a value can't be determined.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if let Some(revision) = capture("git", &["rev-parse", "HEAD"]) {
        println!("cargo:rustc-env=MYPLE_GIT_REVISION={}", revision);
        println!("cargo:rerun-if-changed=../../.git/HEAD");
        println!("cargo:rerun-if-changed=../../.git/refs/heads");
    }

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(version) = capture(&rustc, &["--version"]) {
        println!("cargo:rustc-env=MYPLE_RUSTC_VERSION={}", version);
    }
}

fn capture(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
