// File: crates/stream-core/build.rs
// Summary: Links the extra Windows system libraries Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by the system font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
