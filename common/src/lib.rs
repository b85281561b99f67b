use env_logger::{Builder, Env};

const TRUTHY: [&str; 5] = ["true", "1", "yes", "y", "on"];

/// Loads `.env` if present and initializes the logger, defaulting to `info`.
pub fn setup_env() {
    dotenvy::dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Case-insensitive check against the accepted truthy tokens.
pub fn is_true(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    TRUTHY.contains(&value.as_str())
}
