// Build script for the API base URL injection
// Re-runs whenever API_BASE_URL changes so `option_env!` picks up the new value

fn main() {
    // Tell Cargo to rerun if the configured backend changes
    println!("cargo:rerun-if-env-changed=API_BASE_URL");
    println!("cargo:rerun-if-changed=build.rs");

    match std::env::var("API_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            println!("cargo:warning=Using API_BASE_URL={}", url.trim());
        }
        _ => {
            // Only informational: the frontend falls back to its local default.
            println!("cargo:warning=API_BASE_URL not set, defaulting to http://localhost:3000");
        }
    }
}
