pub mod run;
pub mod schema;

use std::path::Path;

use anyhow::Context;
use formsmith::{ConfigLoader, FormConfig};

/// Load configuration from the environment and, if given, a file.
pub fn load_config(file: Option<&Path>) -> anyhow::Result<FormConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = file {
        loader = loader.with_file(path);
    }
    loader.load().context("failed to load configuration")
}
