//! Build script for mekd-ui
//!
//! Embeds build identification into the binary so the startup banner can
//! report exactly which build is serving estimates: the version-control
//! revision, when it was compiled, and the cargo profile.

use std::process::Command;

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git_revision());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp());
    println!(
        "cargo:rustc-env=BUILD_PROFILE={}",
        std::env::var("PROFILE").as_deref().unwrap_or("unknown")
    );

    // No rerun-if-changed directives: rerun on every build so the revision
    // and timestamp stay current
}

/// Short revision of the working tree, with a `-dirty` suffix when there
/// are uncommitted changes. "unknown" outside a git checkout.
fn git_revision() -> String {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty=-dirty", "--abbrev=8"])
        .output();

    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_string(),
        _ => "unknown".to_string(),
    }
}

/// Compile time in UTC, honoring SOURCE_DATE_EPOCH so repackaged builds can
/// stay reproducible.
fn build_timestamp() -> String {
    let from_epoch = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));

    let timestamp = from_epoch.unwrap_or_else(chrono::Utc::now);
    timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
