fn main() {
    // Stamp the build so the footer can show when the site was published
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    println!("cargo:rerun-if-changed=build.rs");
}
