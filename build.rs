fn main() {
    // Stamp the build so the footer can show the copyright year
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The relay key is baked in with option_env!, so a new key needs a rebuild
    println!("cargo:rerun-if-env-changed=CONTACT_ACCESS_KEY");
    println!("cargo:rerun-if-changed=build.rs");
}
