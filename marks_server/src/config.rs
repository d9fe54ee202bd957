//! Server configuration — loaded from environment variables.

use std::path::PathBuf;

/// Assets shipped with the crate, independent of the working directory.
const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

#[derive(Clone, Debug)]
pub struct MarksConfig {
    /// Directory served under `/public`.
    pub public_dir: PathBuf,
    /// Maximum pooled database connections.
    pub max_connections: usize,
}

impl MarksConfig {
    pub fn from_env() -> Self {
        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR));
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        if !public_dir.is_dir() {
            tracing::warn!(
                "Static directory {} not found -- /public assets will 404",
                public_dir.display()
            );
        }

        Self {
            public_dir,
            max_connections,
        }
    }
}

impl Default for MarksConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            max_connections: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_public_dir_holds_assets() {
        let config = MarksConfig::default();
        assert!(config.public_dir.is_absolute());
        assert!(config.public_dir.join("js/app.js").is_file());
        assert!(config.public_dir.join("css/style.css").is_file());
    }
}
