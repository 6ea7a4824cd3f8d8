use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem, returning both config and its source.
///
/// # Errors
/// Returns an error if the configuration file exists but cannot be read,
/// parsed, or validated.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::defaults());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
