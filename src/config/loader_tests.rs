use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/choropleth")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

const LOCAL: &str = "/project/.choropleth.toml";
const USER: &str = "/home/user/.config/choropleth/config.toml";

#[test]
fn no_config_files_yields_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn local_config_wins_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL, "[chart]\ndomain_max = 5000.0\n")
        .with_file(USER, "[chart]\ndomain_max = 9000.0\n");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!((result.config.chart.domain_max - 5000.0).abs() < f64::EPSILON);
    assert_eq!(result.source, Some(PathBuf::from(LOCAL)));
}

#[test]
fn user_config_used_when_no_local_file() {
    let fs = MockFileSystem::new().with_file(USER, "[join]\nduplicate_keys = \"last-wins\"\n");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(
        result.config.join.duplicate_keys,
        crate::join::DuplicateKeyPolicy::LastWins
    );
    assert_eq!(result.source, Some(PathBuf::from(USER)));
}

#[test]
fn missing_user_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(result.source.is_none());
}

#[test]
fn explicit_path_is_loaded() {
    let fs = MockFileSystem::new().with_file(
        "/etc/map.toml",
        "[attributes]\ncandidates = [\"A\", \"B\"]\nactive = \"B\"\n",
    );
    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/map.toml"))
        .unwrap();
    assert_eq!(result.config.attributes.candidates, ["A", "B"]);
    assert_eq!(result.config.attributes.active.as_deref(), Some("B"));
}

#[test]
fn explicit_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("/nope.toml"));
}

#[test]
fn malformed_toml_is_reported() {
    let fs = MockFileSystem::new().with_file(LOCAL, "[chart\nwidth = 3");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, crate::ChoroplethError::TomlParse(_)));
}

#[test]
fn invalid_semantics_are_rejected_on_load() {
    let fs = MockFileSystem::new().with_file(LOCAL, "[classification]\npalette = [\"#000\"]\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(err.to_string().contains("exactly 5 colors"));
}
