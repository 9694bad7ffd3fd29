use std::process::Command;

fn main() {
    let profile = match std::env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CIPHERKIT_PROFILE={}", profile);
    println!("cargo:rustc-env=CIPHERKIT_GIT_HASH={}", git_hash);
    println!("cargo:rerun-if-env-changed=PROFILE");
}
