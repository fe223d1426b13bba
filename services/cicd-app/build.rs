//! ビルド時の rustc バージョンを `RUSTC_VERSION` として埋め込む

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        // "rustc 1.80.1 (3f5fd8dd4 2024-08-06)" -> "1.80.1"
        .and_then(|line| line.split_whitespace().nth(1).map(str::to_string))
        // rustc を実行できない場合は /api/info の runtime_version が "unknown" になる
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=RUSTC_VERSION={}", version);
}
