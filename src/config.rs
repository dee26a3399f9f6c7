use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Clinsight";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinsight=info"
}

/// Get the application data directory
/// ~/Clinsight/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Clinsight")
}

/// Get the directory holding externally-supplied knowledge tables.
/// `KnowledgeBase::load` reads the three JSON rule files from here when a
/// deployment overrides the bundled clinical set.
pub fn knowledge_dir() -> PathBuf {
    app_data_dir().join("knowledge")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Clinsight"));
    }

    #[test]
    fn knowledge_dir_under_app_data() {
        let knowledge = knowledge_dir();
        let app = app_data_dir();
        assert!(knowledge.starts_with(app));
        assert!(knowledge.ends_with("knowledge"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
