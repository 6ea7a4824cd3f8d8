mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{CONFIG_VERSION, Config, MAX_YEAR, MIN_YEAR};
pub use validation::{validate_config_semantics, validate_organization, validate_year};
