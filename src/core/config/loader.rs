use std::{fs, path::Path};

use super::{ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Command lines from the rc file, in file order.
    pub fn load_commands(&self) -> Result<Vec<String>, ConfigError> {
        match &self.paths.rc_path {
            Some(path) if self.paths.explicit => self.read_commands(path),
            Some(path) if path.exists() => self.read_commands(path),
            _ => Ok(Vec::new()),
        }
    }

    fn read_commands(&self, path: &Path) -> Result<Vec<String>, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ConfigFileUnreadable(path.display().to_string(), e))?;
        Ok(content.lines().filter_map(Self::process_line).collect())
    }

    fn process_line(line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn create_temp_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = env::temp_dir().join(format!("cmpsh_rc_{}_{}", name, std::process::id()));
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[test]
    fn test_process_line() {
        assert_eq!(ConfigLoader::process_line("   "), None);
        assert_eq!(ConfigLoader::process_line("# comment"), None);
        assert_eq!(
            ConfigLoader::process_line("  paths /bin /usr/bin "),
            Some("paths /bin /usr/bin".to_string())
        );
    }

    #[test]
    fn test_load_commands() {
        let content = r#"
            # search both bin directories
            paths /bin /usr/bin

            cd /tmp
        "#;
        let file_path = create_temp_config_file("load", content);
        let paths = ConfigPaths {
            rc_path: Some(file_path.clone()),
            explicit: true,
        };

        let commands = ConfigLoader::new(&paths).load_commands().unwrap();
        assert_eq!(commands, vec!["paths /bin /usr/bin", "cd /tmp"]);

        let _ = fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_default_rc_is_fine() {
        let paths = ConfigPaths {
            rc_path: Some(PathBuf::from("/nonexistent/.cmpshrc")),
            explicit: false,
        };
        assert!(ConfigLoader::new(&paths).load_commands().unwrap().is_empty());
    }

    #[test]
    fn test_missing_explicit_rc_is_an_error() {
        let paths = ConfigPaths {
            rc_path: Some(PathBuf::from("/nonexistent/cmpshrc")),
            explicit: true,
        };
        assert!(matches!(
            ConfigLoader::new(&paths).load_commands(),
            Err(ConfigError::ConfigFileUnreadable(_, _))
        ));
    }
}
