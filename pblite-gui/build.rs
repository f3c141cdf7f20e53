use std::process::Command;

fn git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;

    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|hash| !hash.is_empty())
}

fn main() {
    println!("cargo:rerun-if-changed=../.git/HEAD");

    let hash = git_hash().unwrap_or_else(|| {
        println!("cargo:warning=Unable to determine git hash, using 'unknown'");
        String::from("unknown")
    });

    println!("cargo:rustc-env=GIT_HASH={hash}");
}
