use std::env;

fn main() {
    // バックエンドの抽出データエンドポイント（未指定ならデフォルトを使う）
    if let Ok(endpoint) = env::var("EXTRACTED_DATA_ENDPOINT") {
        if !endpoint.trim().is_empty() {
            println!("cargo:warning=EXTRACTED_DATA_ENDPOINT set to {}", endpoint);
            println!("cargo:rustc-env=EXTRACTED_DATA_ENDPOINT={}", endpoint.trim());
        }
    }

    // アップロード欄の表示フラグ
    if let Ok(flag) = env::var("UPLOAD_ENABLED") {
        println!("cargo:rustc-env=UPLOAD_ENABLED={}", flag.trim());
    }

    println!("cargo:rerun-if-env-changed=EXTRACTED_DATA_ENDPOINT");
    println!("cargo:rerun-if-env-changed=UPLOAD_ENABLED");
}
