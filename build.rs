use std::env;
use std::process::Command;

fn release_tag() -> Option<String> {
    if let Ok(label) = env::var("KURIER_RELEASE") {
        let label = label.trim().to_string();
        if !label.is_empty() {
            return Some(label);
        }
    }
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let tag = String::from_utf8(output.stdout).ok()?;
    let tag = tag.trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KURIER_RELEASE");
    // rust-embed picks the files up at compile time.
    println!("cargo:rerun-if-changed=assets");

    if let Some(tag) = release_tag() {
        println!("cargo:rustc-env=GIT_TAG={tag}");
    }
}
