pub mod exists;
pub mod list;
pub mod render;
pub mod resolve;

use std::path::PathBuf;

use miette::Result;
use teraview::{config, AppContext, ConfigPatch, ViewError, ViewHandler};

/// Build a handler for the app layout rooted at the working directory, with
/// overrides from the optional config file and `--view-path` applied in that
/// order.
fn build_handler(view_path: Option<PathBuf>, config_file: Option<PathBuf>) -> Result<ViewHandler> {
    let cwd = std::env::current_dir().map_err(|e| ViewError::Io {
        context: "getting current directory".into(),
        source: e,
    })?;

    let mut handler = ViewHandler::new(AppContext::from_root(cwd));

    if let Some(path) = &config_file {
        handler.configure(config::load_patch(path)?);
    }
    if let Some(path) = view_path {
        handler.configure(ConfigPatch {
            view_path: Some(path),
            ..Default::default()
        });
    }

    Ok(handler)
}
