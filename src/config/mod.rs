mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{
    AttributesConfig, ChartConfig, ClassificationConfig, Config, DEFAULT_CANDIDATES, DataConfig,
    JoinConfig, MapConfig, TITLE_PLACEHOLDER,
};
pub use validation::validate_config_semantics;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
