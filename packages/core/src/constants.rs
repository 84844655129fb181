use std::env;
use std::path::PathBuf;

/// Project owned by a single-tenant deployment
pub const DEFAULT_PROJECT_ID: i64 = 1;

/// Get the path to the Architecture Studio directory (~/.archstudio)
pub fn archstudio_dir() -> PathBuf {
    // HOME first so tests can redirect it
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".archstudio")
    } else {
        dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".archstudio")
    }
}

/// Get the path to the default SQLite database (~/.archstudio/archstudio.db)
pub fn database_file() -> PathBuf {
    archstudio_dir().join("archstudio.db")
}
