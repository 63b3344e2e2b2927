#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tama::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    // One test covers defaults and the save/read roundtrip: the data
    // directory comes from HOME, which is process-wide state.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_defaults_and_roundtrip(_ctx: &mut ConfigTestContext) {
        // No config file yet: defaults apply
        let config = Config::read().unwrap();
        assert_eq!(config.db_file, None);

        let db_path = config.db_path().unwrap();
        assert!(db_path.ends_with("tama.db"));

        // A saved override comes back and wins over the default
        let custom = Config {
            db_file: Some(PathBuf::from("/tmp/elsewhere/tasks.db")),
        };
        custom.save().unwrap();

        let reloaded = Config::read().unwrap();
        assert_eq!(reloaded, custom);
        assert_eq!(reloaded.db_path().unwrap(), PathBuf::from("/tmp/elsewhere/tasks.db"));
    }
}
