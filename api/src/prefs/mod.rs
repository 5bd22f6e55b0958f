//! User preferences, read from the environment with in-code defaults.

pub mod backend;
pub mod user_prefs;

/// Runtime environment first, then the value baked in at build time. On wasm
/// only the latter exists.
fn env_value(name: &str, baked: Option<&'static str>) -> Option<String> {
    std::env::var(name)
        .ok()
        .or_else(|| baked.map(str::to_string))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
